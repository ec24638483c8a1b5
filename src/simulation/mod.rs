//! Navigation simulators
//!
//! `PositionSimulator` applies the aimed rules, `PlanarSimulator` the
//! simpler planar ones. Both fold a command sequence left to right into a
//! fresh state owned by the run.

pub mod navigator;
pub mod planar;
pub mod position;

pub use navigator::Navigator;
pub use planar::{PlanarSimulator, PlanarState};
pub use position::{PositionSimulator, PositionState};
