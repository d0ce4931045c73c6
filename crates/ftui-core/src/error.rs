//! Library-wide error kind.
//!
//! ftui never propagates decode failures (`InvalidUtf8`/`InvalidEscape`
//! surface as [`crate::event::KeyKind::Unknown`]) or navigation overruns
//! (silently clamped). What *is* propagated is limited to the handful of
//! ways the terminal itself can refuse cooperation.

use thiserror::Error;

/// Errors surfaced by terminal-session acquisition and I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw mode or a size query was attempted on a file descriptor that
    /// isn't a controlling terminal.
    #[error("not a tty")]
    NotATty,

    /// A second raw-mode session was requested while one is already active.
    ///
    /// The terminal is process-global state; only one [`crate::terminal::RawModeGuard`]
    /// may be alive at a time.
    #[error("a raw-mode session is already active")]
    AlreadyActive,

    /// An I/O error occurred while reading from or writing to the terminal.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
