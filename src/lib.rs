//! Dive Nav - submarine course plotter
//!
//! Reads `<action> <magnitude>` navigation commands and replays them to find
//! where the submarine ends up.

pub mod command;
pub mod core;
pub mod report;
pub mod simulation;

pub use command::{Action, Command, RawCommand};
pub use crate::core::error::{NavError, Result};
pub use report::{plot_course, NavigationReport};
pub use simulation::{PlanarSimulator, PlanarState, PositionSimulator, PositionState};
