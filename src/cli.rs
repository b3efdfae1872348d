// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The arguments only pick *which* profile runs. Everything that shapes the
//! run itself (paths, interpreter, script arguments) lives in the profile.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `launchlog`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launchlog",
    version,
    about = "Launch a Python job with fixed arguments and append its output to a log file.",
    long_about = None
)]
pub struct CliArgs {
    /// Name of the launcher profile to run (e.g. `gold`, `pepper`).
    #[arg(value_name = "PROFILE", required_unless_present = "list")]
    pub profile: Option<String>,

    /// Load profiles from this TOML file instead of the built-in ones.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// List available profiles and exit.
    #[arg(long)]
    pub list: bool,

    /// Print the resolved profile, but don't touch the log or run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAUNCHLOG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
