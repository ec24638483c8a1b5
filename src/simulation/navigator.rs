//! Shared left-to-right fold over a command sequence
//!
//! Both rule sets are a state record plus a per-command transition. The
//! fold is strictly sequential: for the aimed rules, each forward step
//! reads the aim as it stands at that point in the sequence.

use crate::command::{Command, RawCommand};
use crate::core::error::{NavError, Result};

/// A navigation state that knows how to apply one command
pub trait Navigator: Default + Sized {
    /// State after `command`, or `None` if any field would overflow
    fn checked_apply(&self, command: Command) -> Option<Self>;

    fn horizontal(&self) -> i64;

    fn depth(&self) -> i64;

    /// Final answer: horizontal position times depth
    fn product(&self) -> Result<i64> {
        let (horizontal, depth) = (self.horizontal(), self.depth());
        horizontal
            .checked_mul(depth)
            .ok_or(NavError::ProductOverflow { horizontal, depth })
    }
}

fn step<N: Navigator>(state: N, command: Command, position: usize, line: usize) -> Result<N> {
    state.checked_apply(command).ok_or_else(|| {
        tracing::warn!(%command, position, line, "arithmetic overflow, aborting run");
        NavError::Overflow { position, line }
    })
}

/// Run typed commands from a fresh state
pub fn fold_commands<N: Navigator>(commands: &[Command]) -> Result<N> {
    commands
        .iter()
        .enumerate()
        .try_fold(N::default(), |state, (position, &command)| {
            step(state, command, position, 0)
        })
}

/// Run raw commands from a fresh state, validating each action as it is reached.
///
/// The first unknown action or overflow aborts the run. No state escapes a
/// failed run.
pub fn fold_raw<N: Navigator>(commands: &[RawCommand]) -> Result<N> {
    commands
        .iter()
        .enumerate()
        .try_fold(N::default(), |state, (position, raw)| {
            let command = Command::try_from_raw(raw, position).inspect_err(|_| {
                tracing::warn!(
                    action = raw.action.as_str(),
                    position,
                    line = raw.line,
                    "unknown action, aborting run"
                );
            })?;
            step(state, command, position, raw.line)
        })
}
