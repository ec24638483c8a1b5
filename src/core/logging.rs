//! tracing subscriber setup for the CLI
//!
//! Logs go to stderr; stdout carries only the result.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::core::config::NavConfig;
use crate::core::error::{NavError, Result};

/// Directive applied on top of the base filter by `--verbose`
pub const VERBOSE_DIRECTIVE: &str = "dive_nav=debug";

/// Build the filter from a directive string.
///
/// With `verbose`, the crate's own target is raised to debug. The directive
/// replaces any `dive_nav=...` entry in `base` rather than sitting beside it.
pub fn build_filter(base: &str, verbose: bool) -> Result<EnvFilter> {
    let filter = EnvFilter::new(base);
    if !verbose {
        return Ok(filter);
    }
    let directive: Directive = VERBOSE_DIRECTIVE
        .parse()
        .map_err(|e| NavError::Config(format!("bad log directive {VERBOSE_DIRECTIVE}: {e}")))?;
    Ok(filter.add_directive(directive))
}

/// Install the global subscriber. `RUST_LOG` wins over the config's filter.
pub fn init_tracing(config: &NavConfig, verbose: bool) -> Result<()> {
    let base = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| config.log_filter.clone());
    let filter = build_filter(&base, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
