#![forbid(unsafe_code)]

//! Minimal styling facade: colors and an SGR-producing `Style`.
//!
//! Out of scope per this repository's spec: terminal-capability
//! negotiation, color-profile downgrade, theming. Widget views treat this
//! crate as an external collaborator that turns a `Style` into a string.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::Style;
