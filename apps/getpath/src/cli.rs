//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// getpath - compute the runtime's path configuration
#[derive(Parser, Debug)]
#[command(name = "getpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute where the runtime finds its standard library and extension modules")]
#[command(long_about = None)]
pub struct Cli {
    /// Program name or path to locate (defaults to how getpath was invoked)
    pub program: Option<String>,

    /// Home override, <prefix>[:<exec_prefix>] (takes precedence over PYTHONHOME)
    #[arg(long, value_name = "HOME")]
    pub home: Option<String>,

    /// Prepended to the module search path (takes precedence over PYTHONPATH)
    #[arg(long, value_name = "PATHS")]
    pub pythonpath: Option<String>,

    /// Build defaults file (TOML) replacing the compiled-in values
    #[arg(long, value_name = "FILE", env = "GETPATH_DEFAULTS")]
    pub defaults: Option<PathBuf>,

    /// Do not report missing libraries
    #[arg(long)]
    pub no_warnings: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
