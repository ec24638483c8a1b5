//! Navigation commands and the line reader that produces them
//!
//! file -> parse_commands -> Vec<RawCommand> -> (simulator validates) -> Command

pub mod action;
pub mod parser;

pub use action::{Action, Command, RawCommand};
pub use parser::{parse_commands, parse_line, read_commands};
