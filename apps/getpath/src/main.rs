//! getpath - compute the runtime's startup path configuration
//!
//! Runs the discovery algorithm for a program name, the way the runtime
//! does at startup, and prints the resulting executable path, prefixes
//! and module search path.

mod cli;
mod display;
mod error;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use getpath_config::{BuildDefaults, RuntimeInputs};
use getpath_discovery::calculate;
use getpath_platform::{encoding::decode_os, Platform};
use getpath_types::PathConfig;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    init_tracing(json_mode, cli.debug);

    if let Err(e) = run(&cli) {
        error!("getpath failed: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: &Cli) -> Result<(), CliError> {
    debug!("Starting getpath v{}", env!("CARGO_PKG_VERSION"));

    // 1. Build defaults: file or compiled in
    let defaults = match &cli.defaults {
        Some(path) => BuildDefaults::load_from_file(path)?,
        None => BuildDefaults::default(),
    };

    // 2. CLI flags, then the environment for whatever is left unset
    let program = match &cli.program {
        Some(program) => program.clone(),
        None => invoked_name()?,
    };
    let mut inputs = RuntimeInputs::new(program).with_warnings(!cli.no_warnings);
    if let Some(home) = cli.home.as_deref().filter(|home| !home.is_empty()) {
        inputs = inputs.with_home(home);
    }
    if let Some(paths) = cli.pythonpath.as_deref().filter(|paths| !paths.is_empty()) {
        inputs = inputs.with_pythonpath_env(paths);
    }
    inputs.merge_env()?;

    let platform = Platform::current();
    let discovery = calculate(PathConfig::new(), &inputs, &defaults, &platform)?;
    discovery.diagnostics.forward_to_tracing();

    let renderer = OutputRenderer::new(cli.json);
    renderer.render_warnings(&discovery.diagnostics);
    renderer.render_result(&discovery)?;
    Ok(())
}

/// The name this process was invoked as
fn invoked_name() -> Result<String, CliError> {
    let arg0 = std::env::args_os().next().unwrap_or_else(|| "getpath".into());
    decode_os(&arg0, "program name").map_err(|e| getpath_errors::Error::from(e).into())
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let filter = if debug_enabled_flag {
        tracing_subscriber::EnvFilter::new("debug")
    } else if json_mode {
        // keep stderr quiet next to machine-readable output
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"))
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error"))
    };

    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);
    if json_mode {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
