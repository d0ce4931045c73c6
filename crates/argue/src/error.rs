//! Errors produced while building or parsing a [`crate::Command`].

use thiserror::Error;

/// Everything that can go wrong turning `argv` into a [`crate::Matches`].
///
/// `--help`/`--version` are modeled as errors too (`Help`/`Version`)
/// since both end the parse short of producing `Matches`, but both exit
/// `0`; see [`ArgError::exit_code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// `--help`/`-h` was given; the payload is the rendered help text.
    #[error("{0}")]
    Help(String),

    /// `--version` was given; the payload is the rendered version line.
    #[error("{0}")]
    Version(String),

    /// A token looked like an option (`-x`/`--name`) but matches nothing
    /// this command declared.
    #[error("unknown argument: {0}")]
    Unknown(String),

    /// A required argument (named or positional) was never supplied.
    #[error("missing required argument: {0}")]
    MissingRequired(String),

    /// An argument that takes a value was given with nothing after it.
    #[error("argument {0} requires a value")]
    MissingValue(String),

    /// A bare positional token appeared with no declared positional slot
    /// left to absorb it.
    #[error("unexpected argument: {0}")]
    UnexpectedPositional(String),

    /// A value was rejected by the argument's `.validator(...)`.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ArgError {
    /// The process exit code this error implies: `0` for help/version
    /// (the user asked for them, it's not a failure), `2` for everything
    /// else, matching the getopt/CLI11 convention for usage errors.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Help(_) | Self::Version(_) => 0,
            _ => 2,
        }
    }
}
