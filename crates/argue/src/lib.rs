#![forbid(unsafe_code)]
//! A CLAP/CLI11-style command-line argument parser.
//!
//! ```
//! use argue::{Arg, Command};
//!
//! let cmd = Command::new("greet")
//!     .version("1.0.0")
//!     .about("Greets someone")
//!     .arg(Arg::new("name").positional().required())
//!     .arg(Arg::new("count").short('c').long("count").takes_value().default_value("1"));
//!
//! let args: Vec<String> = vec!["alice".into(), "-c".into(), "3".into()];
//! let matches = cmd.parse(&args).unwrap();
//! assert_eq!(matches.get_str("name"), Some("alice"));
//! assert_eq!(matches.get_str("count"), Some("3"));
//! ```
//!
//! Kept deliberately small relative to its C++ namesakes `argue`/`argu`:
//! one flat command (no subcommand tree), no shell-completion generation,
//! no config-file layer. The builder shape and the single `ArgError`
//! enum with a stderr-ready `Display` impl carry over their design.

mod arg;
mod command;
mod error;
mod matches;

pub use arg::Arg;
pub use command::Command;
pub use error::ArgError;
pub use matches::Matches;
