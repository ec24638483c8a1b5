use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Malformed line {line} ({content:?}): {reason}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// `line` is 1-based, 0 when the command did not come from a file
    #[error("Invalid command {action:?} on line {line} (position {position})")]
    InvalidCommand {
        action: String,
        position: usize,
        line: usize,
    },

    #[error("Arithmetic overflow applying command on line {line} (position {position})")]
    Overflow { position: usize, line: usize },

    #[error("Product overflows: horizontal {horizontal} * depth {depth}")]
    ProductOverflow { horizontal: i64, depth: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
