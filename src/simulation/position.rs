//! Aimed navigation: down/up steer, forward dives along the current aim

use serde::{Deserialize, Serialize};

use crate::command::{Action, Command, RawCommand};
use crate::core::error::Result;
use crate::simulation::navigator::{fold_commands, fold_raw, Navigator};

/// Cumulative position of the submarine under aimed rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionState {
    pub horizontal: i64,
    pub depth: i64,
    /// Pitch that scales each forward step into depth change. May go negative.
    pub aim: i64,
}

impl PositionState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for PositionState {
    fn checked_apply(&self, command: Command) -> Option<Self> {
        let x = i64::from(command.magnitude);
        let mut next = *self;
        match command.action {
            Action::Forward => {
                next.horizontal = self.horizontal.checked_add(x)?;
                next.depth = self.depth.checked_add(x.checked_mul(self.aim)?)?;
            }
            Action::Down => next.aim = self.aim.checked_add(x)?,
            Action::Up => next.aim = self.aim.checked_sub(x)?,
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

/// Replays a command sequence under aimed rules
pub struct PositionSimulator;

impl PositionSimulator {
    /// Run already-validated commands. Fails only on overflow.
    pub fn run(commands: &[Command]) -> Result<PositionState> {
        let state: PositionState = fold_commands(commands)?;
        tracing::debug!(commands = commands.len(), ?state, "aimed run complete");
        Ok(state)
    }

    /// Run reader output, failing on the first unknown action or overflow
    pub fn run_raw(commands: &[RawCommand]) -> Result<PositionState> {
        let state: PositionState = fold_raw(commands)?;
        tracing::debug!(commands = commands.len(), ?state, "aimed run complete");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_commands;
    use crate::core::error::NavError;

    fn example_course() -> Vec<Command> {
        vec![
            Command::forward(5),
            Command::down(5),
            Command::forward(8),
            Command::up(3),
            Command::down(8),
            Command::forward(2),
        ]
    }

    #[test]
    fn test_example_course() {
        let state = PositionSimulator::run(&example_course()).unwrap();
        assert_eq!(state.horizontal, 15);
        assert_eq!(state.depth, 60);
        assert_eq!(state.aim, 10);
        assert_eq!(state.product().unwrap(), 900);
    }

    #[test]
    fn test_empty_course_stays_at_origin() {
        assert_eq!(PositionSimulator::run(&[]).unwrap(), PositionState::new());
    }

    #[test]
    fn test_order_matters() {
        let dive_first = PositionSimulator::run(&[Command::down(5), Command::forward(2)]).unwrap();
        assert_eq!(
            dive_first,
            PositionState { horizontal: 2, depth: 10, aim: 5 }
        );

        let forward_first =
            PositionSimulator::run(&[Command::forward(2), Command::down(5)]).unwrap();
        assert_eq!(
            forward_first,
            PositionState { horizontal: 2, depth: 0, aim: 5 }
        );
    }

    #[test]
    fn test_negative_aim_rises() {
        let state = PositionSimulator::run(&[
            Command::down(2),
            Command::forward(3),
            Command::up(5),
            Command::forward(1),
        ])
        .unwrap();
        assert_eq!(state.aim, -3);
        assert_eq!(state.depth, 3);
        assert_eq!(state.horizontal, 4);
    }

    #[test]
    fn test_run_raw_matches_run_for_valid_input() {
        let raw: Vec<RawCommand> = example_course().into_iter().map(RawCommand::from).collect();
        assert_eq!(
            PositionSimulator::run_raw(&raw).unwrap(),
            PositionSimulator::run(&example_course()).unwrap()
        );
    }

    #[test]
    fn test_run_raw_rejects_unknown_action() {
        let raw = vec![
            RawCommand::new("forward", 5),
            RawCommand::new("down", 5),
            RawCommand::new("dive", 3),
            RawCommand::new("forward", 8),
        ];
        match PositionSimulator::run_raw(&raw) {
            Err(NavError::InvalidCommand { action, position, .. }) => {
                assert_eq!(action, "dive");
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidCommand, got {:?}", other),
        }
    }

    #[test]
    fn test_large_dive_below_i64_max() {
        let state = PositionSimulator::run(&[
            Command::down(2_000_000_000),
            Command::forward(4_000_000_000),
        ])
        .unwrap();
        assert_eq!(state.depth, 8_000_000_000_000_000_000);
        assert_eq!(state.horizontal, 4_000_000_000);
    }

    #[test]
    fn test_depth_overflow_at_u32_boundary_is_an_error() {
        let commands = parse_commands("down 4294967295\nforward 4294967295\n").unwrap();
        match PositionSimulator::run_raw(&commands) {
            Err(NavError::Overflow { position, line }) => {
                assert_eq!(position, 1);
                assert_eq!(line, 2);
            }
            other => panic!("expected Overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_run_overflow_is_an_error() {
        let course = [Command::down(u32::MAX), Command::forward(u32::MAX)];
        assert!(matches!(
            PositionSimulator::run(&course),
            Err(NavError::Overflow { position: 1, line: 0 })
        ));
    }

    #[test]
    fn test_product_overflow_is_an_error() {
        let state = PositionSimulator::run(&[Command::down(1), Command::forward(u32::MAX)])
            .unwrap();
        assert_eq!(state.depth, i64::from(u32::MAX));
        assert!(matches!(
            state.product(),
            Err(NavError::ProductOverflow { .. })
        ));
    }
}
