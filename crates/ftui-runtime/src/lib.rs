#![forbid(unsafe_code)]

//! The Model/Update/View runtime: commands, messages, and the event loop
//! that ties them together with the terminal and renderer.

pub mod cmd;
pub mod program;

pub use cmd::{Cmd, Msg, Scheduler};
pub use program::{Model, Program, ProgramConfig};
