#![forbid(unsafe_code)]

//! The diff-free live-region renderer.

pub mod live_region;

pub use live_region::LiveRegion;
