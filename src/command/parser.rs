//! Read command files into ordered [`RawCommand`] sequences
//!
//! Each non-blank line must be `<action> <magnitude>`. The reader checks
//! shape only; whether the action is one the submarine understands is left
//! to the simulator.

use nom::character::complete::{alpha1, digit1, space1};
use nom::combinator::{all_consuming, map_res};
use nom::error::ErrorKind;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};
use std::fs;
use std::path::Path;

use crate::command::action::RawCommand;
use crate::core::error::{NavError, Result};

fn command_line(input: &str) -> IResult<&str, (&str, u32)> {
    all_consuming(separated_pair(
        alpha1,
        space1,
        map_res(digit1, |digits: &str| digits.parse::<u32>()),
    ))
    .parse(input)
}

fn describe(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Alpha => "expected an action word at the start of the line",
        ErrorKind::Space => "expected a space between action and magnitude",
        ErrorKind::Digit => "magnitude is not a non-negative integer",
        ErrorKind::MapRes => "magnitude does not fit in 32 bits",
        ErrorKind::Eof => "unexpected text after the magnitude",
        _ => "expected `<action> <magnitude>`",
    }
}

/// Parse a single line. `line_no` is 1-based and only used for reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<RawCommand> {
    let trimmed = line.strip_suffix('\r').unwrap_or(line);

    match command_line(trimmed) {
        Ok((_, (action, magnitude))) => Ok(RawCommand {
            action: action.to_string(),
            magnitude,
            line: line_no,
        }),
        Err(err) => {
            let reason = match err {
                nom::Err::Error(e) | nom::Err::Failure(e) => describe(e.code),
                nom::Err::Incomplete(_) => "line ended early",
            };
            tracing::warn!(line = line_no, content = trimmed, reason, "rejecting line");
            Err(NavError::MalformedLine {
                line: line_no,
                content: trimmed.to_string(),
                reason: reason.to_string(),
            })
        }
    }
}

/// Parse every non-blank line of `input`, stopping at the first bad one
pub fn parse_commands(input: &str) -> Result<Vec<RawCommand>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Read a command file from disk
pub fn read_commands(path: &Path) -> Result<Vec<RawCommand>> {
    let contents = fs::read_to_string(path)?;
    let commands = parse_commands(&contents)?;
    tracing::debug!(path = %path.display(), count = commands.len(), "read commands");
    Ok(commands)
}
