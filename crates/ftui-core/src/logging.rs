//! Structured logging, feature-gated behind `tracing`.
//!
//! A TUI program owns its own stdout, so `println!`-debugging is off the
//! table; anything worth logging goes through `tracing` instead, and only
//! when a consumer opts into the `tracing` feature. With the feature off
//! these macros compile away entirely.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, info_span, warn, warn_span};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, info, warn};
