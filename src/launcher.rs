// src/launcher.rs

//! The launch sequence.
//!
//! 1. Check the working directory (fatal if missing, nothing is logged).
//! 2. Append the start marker.
//! 3. Resolve the interpreter: activate the venv (interactive) or take the
//!    configured binary as-is (unattended).
//! 4. Run the child, streaming its combined output into the log.
//! 5. Interactive: on a non-zero exit, log the code, point the operator at
//!    the log and pause.
//! 6. Unattended: append `Finished.` no matter how the child ended.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::config::{LaunchConfig, LaunchPolicy};
use crate::console::Console;
use crate::errors::{LaunchError, Result};
use crate::exec::{Activation, Invocation, ProcessRunner};
use crate::fs::FileSystem;
use crate::runlog::{error_code_line, RunLog};
use crate::types::{ChildExit, PolicyKind};

/// Exit status when the interactive policy can't find its activation script.
pub const ACTIVATION_MISSING_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The venv's activation entry point was missing; the child never ran.
    ActivationMissing { entry_point: PathBuf },
    /// The child was invoked (or at least attempted) and has finished.
    Completed { exit: ChildExit },
}

/// Result of one launcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub profile: String,
    pub policy: PolicyKind,
    pub log_path: PathBuf,
    pub outcome: LaunchOutcome,
    /// Status the launcher process should exit with.
    pub exit_code: i32,
}

pub fn activation_missing_line(entry_point: &Path) -> String {
    format!(
        "ERROR: virtual environment activation script not found: {}",
        entry_point.display()
    )
}

pub fn see_log_line(log_path: &Path) -> String {
    format!("Application failed. See log file: {}", log_path.display())
}

pub struct Launcher<R: ProcessRunner, C: Console> {
    fs: Arc<dyn FileSystem>,
    runner: R,
    console: C,
    inherited_path: Option<OsString>,
}

impl<R: ProcessRunner, C: Console> Launcher<R, C> {
    /// The child inherits the launcher's `PATH` unless overridden with
    /// [`Launcher::with_inherited_path`].
    pub fn new(fs: Arc<dyn FileSystem>, runner: R, console: C) -> Self {
        Self {
            fs,
            runner,
            console,
            inherited_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_inherited_path(mut self, path: Option<OsString>) -> Self {
        self.inherited_path = path;
        self
    }

    pub async fn launch(&mut self, config: &LaunchConfig) -> Result<LaunchReport> {
        let policy = config.policy.kind();
        info!(profile = %config.name, %policy, "launching profile");

        if let Some(dir) = &config.working_dir {
            if !self.fs.is_dir(dir) {
                return Err(LaunchError::WorkingDirectory(dir.clone()));
            }
        }

        let log = RunLog::new(Arc::clone(&self.fs), config.resolved_log_path());
        log.start_marker(&Local::now())?;

        let report = match &config.policy {
            LaunchPolicy::Interactive { venv, interpreter } => {
                self.launch_interactive(config, &log, venv, interpreter).await?
            }
            LaunchPolicy::Unattended { interpreter } => {
                self.launch_unattended(config, &log, interpreter).await?
            }
        };

        info!(
            profile = %report.profile,
            exit_code = report.exit_code,
            log = %report.log_path.display(),
            "launcher finished"
        );
        Ok(report)
    }

    async fn launch_interactive(
        &mut self,
        config: &LaunchConfig,
        log: &RunLog,
        venv: &Path,
        interpreter: &str,
    ) -> Result<LaunchReport> {
        let activation = Activation::for_venv(config.resolve(venv));

        if !activation.is_present(self.fs.as_ref()) {
            let entry_point = activation.entry_point();
            warn!(entry_point = %entry_point.display(), "activation entry point missing; not starting child");

            let line = activation_missing_line(&entry_point);
            log.line(&line)?;
            self.console.message(&line);
            self.console.pause().await;

            return Ok(report(
                config,
                log,
                LaunchOutcome::ActivationMissing { entry_point },
                ACTIVATION_MISSING_EXIT_CODE,
            ));
        }

        let program = activation.resolve_program(interpreter, self.fs.as_ref());
        let mut invocation = base_invocation(config, program);
        activation.apply(&mut invocation, self.inherited_path.clone())?;
        info!(venv = %activation.venv().display(), "virtual environment activated");

        let output = self.runner.run_and_capture(&invocation, log).await?;
        log.close_line()?;
        let exit = output.exit;

        let exit_code = if exit.success() {
            0
        } else {
            let code = exit.code();
            log.line(&error_code_line(code))?;
            self.console.message(&see_log_line(log.path()));
            self.console.pause().await;
            code
        };

        Ok(report(config, log, LaunchOutcome::Completed { exit }, exit_code))
    }

    async fn launch_unattended(
        &mut self,
        config: &LaunchConfig,
        log: &RunLog,
        interpreter: &Path,
    ) -> Result<LaunchReport> {
        let invocation = base_invocation(config, config.resolve(interpreter));

        let output = self.runner.run_and_capture(&invocation, log).await?;
        log.finished_marker(&Local::now())?;

        Ok(report(
            config,
            log,
            LaunchOutcome::Completed { exit: output.exit },
            0,
        ))
    }
}

fn base_invocation(config: &LaunchConfig, program: PathBuf) -> Invocation {
    Invocation::new(program)
        .arg(config.resolved_script())
        .args(&config.args)
        .current_dir(config.working_dir.as_deref())
}

fn report(config: &LaunchConfig, log: &RunLog, outcome: LaunchOutcome, exit_code: i32) -> LaunchReport {
    LaunchReport {
        profile: config.name.clone(),
        policy: config.policy.kind(),
        log_path: log.path().to_path_buf(),
        outcome,
        exit_code,
    }
}
