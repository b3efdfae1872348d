// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod runlog;
pub mod types;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, LaunchConfig, LaunchPolicy, load_profiles};
use crate::console::StdConsole;
use crate::errors::{LaunchError, Result};
use crate::exec::RealProcessRunner;
use crate::fs::RealFileSystem;
use crate::launcher::Launcher;

/// High-level entry point used by `main.rs`.
///
/// Resolves the requested profile and runs it with the real filesystem,
/// process runner and console. Returns the exit status the launcher process
/// should end with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_profiles(args.config.as_deref().map(Path::new))?;

    if args.list {
        print_profiles(&cfg);
        return Ok(0);
    }

    let name = args
        .profile
        .as_deref()
        .ok_or_else(|| LaunchError::ConfigError("no profile name given".to_string()))?;
    let profile = cfg
        .get(name)
        .ok_or_else(|| LaunchError::UnknownProfile(name.to_string()))?;

    if args.dry_run {
        print_dry_run(profile);
        return Ok(0);
    }

    // The console delivers Ctrl-C to the child as well. Listening replaces the
    // default SIGINT handler for the rest of the process, so every Ctrl-C is
    // left to the child and the launcher always writes its closing lines;
    // nothing is cancelled.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received; waiting for child process to exit");
        }
    });

    let mut launcher = Launcher::new(
        Arc::new(RealFileSystem),
        RealProcessRunner::new(),
        StdConsole::new(),
    );
    let report = launcher.launch(profile).await?;
    Ok(report.exit_code)
}

fn print_profiles(cfg: &ConfigFile) {
    println!("profiles ({}):", cfg.len());
    for profile in cfg.profiles() {
        println!("  - {} ({})", profile.name, profile.policy.kind());
    }
}

/// Simple dry-run output: print what would run and where output goes.
fn print_dry_run(profile: &LaunchConfig) {
    println!("launchlog dry-run");
    println!("  profile: {}", profile.name);
    println!("  policy: {}", profile.policy.kind());
    if let Some(dir) = &profile.working_dir {
        println!("  working_dir: {}", dir.display());
    }
    match &profile.policy {
        LaunchPolicy::Interactive { venv, interpreter } => {
            println!("  venv: {}", profile.resolve(venv).display());
            println!("  interpreter: {interpreter} (resolved inside venv)");
        }
        LaunchPolicy::Unattended { interpreter } => {
            println!("  interpreter: {}", profile.resolve(interpreter).display());
        }
    }
    println!("  script: {}", profile.resolved_script().display());
    if !profile.args.is_empty() {
        println!("  args: {:?}", profile.args);
    }
    println!("  log: {}", profile.resolved_log_path().display());

    debug!("dry-run complete (no execution)");
}
