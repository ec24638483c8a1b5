pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::NavConfig;
pub use types::{NavigationMode, OutputFormat};
