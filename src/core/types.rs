//! Core type definitions shared by the simulators, the report and the CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::NavError;

/// Which set of transition rules a run uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// down/up steer the aim, forward dives along it
    #[default]
    Aimed,
    /// down/up move depth directly
    Planar,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::Aimed => write!(f, "aimed"),
            NavigationMode::Planar => write!(f, "planar"),
        }
    }
}

impl FromStr for NavigationMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aimed" => Ok(NavigationMode::Aimed),
            "planar" => Ok(NavigationMode::Planar),
            other => Err(NavError::Config(format!("unknown mode: {other}"))),
        }
    }
}

/// How the final result is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(NavError::Config(format!("unknown format: {other}"))),
        }
    }
}
