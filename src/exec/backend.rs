// src/exec/backend.rs

//! Pluggable process runner abstraction.
//!
//! The launcher talks to a `ProcessRunner` instead of spawning processes
//! itself. Production uses [`RealProcessRunner`](super::RealProcessRunner);
//! tests provide a runner that records invocations and replays canned output
//! without starting anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::Invocation;
use crate::runlog::RunLog;
use crate::types::ChildExit;

/// What a finished child left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub exit: ChildExit,
}

/// Runs one child to completion, capturing its combined output.
///
/// Implementations must:
/// - route everything the child writes (stdout and stderr, merged in write
///   order) into `log`, and return once the child itself has exited;
/// - report a child that cannot be started as [`ChildExit::LaunchFailed`],
///   writing the failure text to `log` the way a shell would, rather than
///   returning an error.
///
/// `Err` is reserved for the launcher's own failures (e.g. the log cannot be
/// written).
pub trait ProcessRunner: Send {
    fn run_and_capture<'a>(
        &'a mut self,
        invocation: &'a Invocation,
        log: &'a RunLog,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput>> + Send + 'a>>;
}
