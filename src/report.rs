//! Final navigation report and its text/JSON rendering

use serde::Serialize;

use crate::command::RawCommand;
use crate::core::error::Result;
use crate::core::types::{NavigationMode, OutputFormat};
use crate::simulation::{
    Navigator, PlanarSimulator, PlanarState, PositionSimulator, PositionState,
};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationReport {
    pub mode: NavigationMode,
    pub commands: usize,
    pub horizontal: i64,
    pub depth: i64,
    /// Only tracked under aimed rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aim: Option<i64>,
    pub product: i64,
}

impl NavigationReport {
    pub fn from_position(state: &PositionState, commands: usize) -> Result<Self> {
        Ok(Self {
            mode: NavigationMode::Aimed,
            commands,
            horizontal: state.horizontal,
            depth: state.depth,
            aim: Some(state.aim),
            product: state.product()?,
        })
    }

    pub fn from_planar(state: &PlanarState, commands: usize) -> Result<Self> {
        Ok(Self {
            mode: NavigationMode::Planar,
            commands,
            horizontal: state.horizontal,
            depth: state.depth,
            aim: None,
            product: state.product()?,
        })
    }

    /// Text output is the bare product; JSON is the whole report
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.product.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Run reader output under the chosen rules and summarize the result
pub fn plot_course(commands: &[RawCommand], mode: NavigationMode) -> Result<NavigationReport> {
    let report = match mode {
        NavigationMode::Aimed => {
            let state = PositionSimulator::run_raw(commands)?;
            NavigationReport::from_position(&state, commands.len())?
        }
        NavigationMode::Planar => {
            let state = PlanarSimulator::run_raw(commands)?;
            NavigationReport::from_planar(&state, commands.len())?
        }
    };
    tracing::info!(mode = %report.mode, product = report.product, "course plotted");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_commands;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn test_plot_course_both_modes() {
        let commands = parse_commands(EXAMPLE).unwrap();

        let aimed = plot_course(&commands, NavigationMode::Aimed).unwrap();
        assert_eq!(aimed.product, 900);
        assert_eq!(aimed.aim, Some(10));
        assert_eq!(aimed.commands, 6);

        let planar = plot_course(&commands, NavigationMode::Planar).unwrap();
        assert_eq!(planar.product, 150);
        assert_eq!(planar.aim, None);
    }

    #[test]
    fn test_text_render_is_product_only() {
        let report = NavigationReport::from_position(
            &PositionState { horizontal: 15, depth: 60, aim: 10 },
            6,
        )
        .unwrap();
        assert_eq!(report.render(OutputFormat::Text).unwrap(), "900");
    }

    #[test]
    fn test_json_render_fields() {
        let report =
            NavigationReport::from_planar(&PlanarState { horizontal: 15, depth: 10 }, 6).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["mode"], "planar");
        assert_eq!(json["product"], 150);
        assert_eq!(json["commands"], 6);
        assert!(json.get("aim").is_none());
    }

    #[test]
    fn test_plot_course_surfaces_product_overflow() {
        let commands = parse_commands("forward 4294967295\ndown 4294967295\n").unwrap();
        assert!(matches!(
            plot_course(&commands, NavigationMode::Planar),
            Err(crate::core::error::NavError::ProductOverflow { .. })
        ));
    }
}
