//! Navigation command types
//!
//! A line from the input file becomes a [`RawCommand`] first: the magnitude
//! is a checked integer but the action is still just a token. Turning the
//! token into an [`Action`] happens in the simulator, which knows where in
//! the sequence the command sits and can report that position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{NavError, Result};

/// The closed set of things a submarine can be told to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Forward,
    Down,
    Up,
}

impl Action {
    /// Match an input token against the action set. Tokens are lowercase.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "forward" => Some(Action::Forward),
            "down" => Some(Action::Down),
            "up" => Some(Action::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Down => "down",
            Action::Up => "up",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated navigation instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub action: Action,
    pub magnitude: u32,
}

impl Command {
    pub fn new(action: Action, magnitude: u32) -> Self {
        Self { action, magnitude }
    }

    pub fn forward(magnitude: u32) -> Self {
        Self::new(Action::Forward, magnitude)
    }

    pub fn down(magnitude: u32) -> Self {
        Self::new(Action::Down, magnitude)
    }

    pub fn up(magnitude: u32) -> Self {
        Self::new(Action::Up, magnitude)
    }

    /// Validate a raw command's action token.
    ///
    /// `position` is the 0-based index of `raw` in its sequence.
    pub fn try_from_raw(raw: &RawCommand, position: usize) -> Result<Self> {
        match Action::from_token(&raw.action) {
            Some(action) => Ok(Self::new(action, raw.magnitude)),
            None => Err(NavError::InvalidCommand {
                action: raw.action.clone(),
                position,
                line: raw.line,
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.magnitude)
    }
}

/// A command as read from input, before its action is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub action: String,
    pub magnitude: u32,
    /// 1-based source line, 0 when the command did not come from a file
    pub line: usize,
}

impl RawCommand {
    pub fn new(action: impl Into<String>, magnitude: u32) -> Self {
        Self {
            action: action.into(),
            magnitude,
            line: 0,
        }
    }
}

impl From<Command> for RawCommand {
    fn from(command: Command) -> Self {
        Self::new(command.action.as_str(), command.magnitude)
    }
}
