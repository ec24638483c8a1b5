//! Dive Nav - Entry Point
//!
//! Reads a command file, replays it under the chosen navigation rules and
//! prints horizontal position times depth.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dive_nav::command::read_commands;
use dive_nav::core::logging::init_tracing;
use dive_nav::core::{NavConfig, NavigationMode, OutputFormat};
use dive_nav::{plot_course, Result};

/// Dive Nav - replay submarine navigation commands
#[derive(Parser, Debug)]
#[command(name = "dive-nav")]
#[command(about = "Replay submarine navigation commands and print horizontal position times depth")]
struct Args {
    /// Command file, one `<action> <magnitude>` per line
    input: PathBuf,

    /// Navigation rules: aimed or planar
    #[arg(long, short = 'm')]
    mode: Option<NavigationMode>,

    /// Output format: text or json
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => NavConfig::load(path)?,
        None => NavConfig::new(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    init_tracing(&config, args.verbose)?;
    tracing::debug!(?config, input = %args.input.display(), "starting run");

    let commands = read_commands(&args.input)?;
    let report = plot_course(&commands, config.mode)?;
    println!("{}", report.render(config.format)?);

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
