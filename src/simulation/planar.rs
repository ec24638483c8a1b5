//! Planar navigation: down/up change depth directly
//!
//! Every transition is a plain addition, so the result does not depend on
//! command order.

use serde::{Deserialize, Serialize};

use crate::command::{Action, Command, RawCommand};
use crate::core::error::Result;
use crate::simulation::navigator::{fold_commands, fold_raw, Navigator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarState {
    pub horizontal: i64,
    pub depth: i64,
}

impl Navigator for PlanarState {
    fn checked_apply(&self, command: Command) -> Option<Self> {
        let x = i64::from(command.magnitude);
        let mut next = *self;
        match command.action {
            Action::Forward => next.horizontal = self.horizontal.checked_add(x)?,
            Action::Down => next.depth = self.depth.checked_add(x)?,
            Action::Up => next.depth = self.depth.checked_sub(x)?,
        }
        Some(next)
    }

    fn horizontal(&self) -> i64 {
        self.horizontal
    }

    fn depth(&self) -> i64 {
        self.depth
    }
}

pub struct PlanarSimulator;

impl PlanarSimulator {
    pub fn run(commands: &[Command]) -> Result<PlanarState> {
        let state: PlanarState = fold_commands(commands)?;
        tracing::debug!(commands = commands.len(), ?state, "planar run complete");
        Ok(state)
    }

    pub fn run_raw(commands: &[RawCommand]) -> Result<PlanarState> {
        let state: PlanarState = fold_raw(commands)?;
        tracing::debug!(commands = commands.len(), ?state, "planar run complete");
        Ok(state)
    }
}
