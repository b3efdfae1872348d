// src/console.rs

//! Operator-facing console.
//!
//! Only the interactive policy talks to the operator: it prints a short
//! message and then waits so the window doesn't vanish before it is read.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::pin::Pin;

use tracing::debug;

pub const PAUSE_PROMPT: &str = "Press Enter to continue . . .";

pub trait Console: Send {
    /// Show one line to the operator.
    fn message(&mut self, line: &str);

    /// Resolve once the operator acknowledges. Must resolve on EOF.
    fn pause(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Console backed by the process's stdout/stdin.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn message(&mut self, line: &str) {
        println!("{line}");
    }

    fn pause(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async {
            print!("{PAUSE_PROMPT}");
            let _ = io::stdout().flush();

            // Stdin reads block; keep them off the runtime's worker threads.
            let read = tokio::task::spawn_blocking(|| {
                let mut buf = String::new();
                // EOF or a closed stdin means nobody is there to acknowledge.
                io::stdin().lock().read_line(&mut buf).map(|_| ())
            })
            .await;

            if let Ok(Err(e)) = read {
                debug!(error = %e, "stdin unavailable while pausing");
            }
        })
    }
}
