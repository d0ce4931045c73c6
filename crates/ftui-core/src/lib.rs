#![forbid(unsafe_code)]

//! Core: terminal lifecycle, raw-mode I/O, and input-event decoding.
//!
//! This crate owns the two lowest layers of the ftui stack: the terminal
//! session (raw mode, alternate screen, cursor control, size queries) and
//! the byte-stream input decoder that turns a TTY's raw bytes into typed
//! [`event::KeyEvent`]s.

pub mod error;
pub mod event;
pub mod input_parser;
pub mod logging;
pub mod terminal;

pub use error::{Error, Result};
pub use event::{KeyEvent, KeyKind};
pub use input_parser::{ByteSource, InputParser};
