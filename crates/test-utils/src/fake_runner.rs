use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use launchlog::errors::Result;
use launchlog::exec::{Invocation, ProcessRunner, RunOutput};
use launchlog::runlog::RunLog;
use launchlog::types::ChildExit;

/// A fake runner that:
/// - records every invocation it is asked to run
/// - writes its canned output to the run log, like a real child would
/// - reports the canned exit.
#[derive(Debug, Clone)]
pub struct FakeRunner {
    exit: ChildExit,
    output: Vec<u8>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl FakeRunner {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            exit: ChildExit::Exited(code),
            output: Vec::new(),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_to_launch(reason: &str) -> Self {
        Self {
            exit: ChildExit::LaunchFailed(reason.to_string()),
            output: format!("failed to launch: {reason}\n").into_bytes(),
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_output(mut self, output: impl Into<Vec<u8>>) -> Self {
        self.output = output.into();
        self
    }

    /// Shared handle to the recorded invocations.
    pub fn invocations(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.invocations)
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ProcessRunner for FakeRunner {
    fn run_and_capture<'a>(
        &'a mut self,
        invocation: &'a Invocation,
        log: &'a RunLog,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutput>> + Send + 'a>> {
        Box::pin(async move {
            {
                let mut guard = self.invocations.lock().unwrap();
                guard.push(invocation.clone());
            }

            log.output(&self.output)?;

            Ok(RunOutput {
                exit: self.exit.clone(),
            })
        })
    }
}
