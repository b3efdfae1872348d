// src/exec/runner.rs

//! Real process runner built on `tokio::process`.

use std::fs::{File, OpenOptions};
use std::future::Future;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tracing::{info, warn};

use crate::errors::Result;
use crate::exec::{Invocation, ProcessRunner, RunOutput};
use crate::runlog::RunLog;
use crate::types::ChildExit;

/// Hands the child an append-mode handle to the run log as both stdout and
/// stderr, then waits for the child itself to exit.
///
/// Processes the child leaves behind keep their copy of the handle but are
/// not waited for.
#[derive(Debug, Default)]
pub struct RealProcessRunner;

impl RealProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for RealProcessRunner {
    fn run_and_capture<'a>(
        &'a mut self,
        invocation: &'a Invocation,
        log: &'a RunLog,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput>> + Send + 'a>> {
        Box::pin(run_and_capture(invocation, log))
    }
}

async fn run_and_capture(invocation: &Invocation, log: &RunLog) -> Result<RunOutput> {
    info!(cmd = %invocation, "starting child process");

    let stdout = open_for_append(log.path())?;
    let stderr = stdout
        .try_clone()
        .with_context(|| format!("duplicating handle for {:?}", log.path()))?;

    let mut cmd = invocation.to_command();
    cmd.stdout(Stdio::from(stdout)).stderr(Stdio::from(stderr));

    let spawned = cmd.spawn();
    // The parent's copies of the handle go away with `cmd`.
    drop(cmd);

    let mut child = match spawned {
        Ok(child) => child,
        Err(err) => {
            warn!(program = %invocation.program.display(), error = %err, "failed to launch child process");
            let text = format!(
                "failed to launch '{}': {err}\n",
                invocation.program.display()
            );
            log.output(text.as_bytes())?;
            return Ok(RunOutput {
                exit: ChildExit::LaunchFailed(err.to_string()),
            });
        }
    };

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for '{}'", invocation.program.display()))?;
    let code = status.code().unwrap_or(-1);

    info!(exit_code = code, success = status.success(), "child process exited");

    let at_line_start = ends_with_newline(log.path())
        .with_context(|| format!("inspecting {:?}", log.path()))?;
    log.written_externally(at_line_start);

    Ok(RunOutput {
        exit: ChildExit::Exited(code),
    })
}

fn open_for_append(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {:?} for append", path))
}

/// Whether the file is empty or its last byte is `\n`.
fn ends_with_newline(path: &Path) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
