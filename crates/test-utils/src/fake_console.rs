use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use launchlog::console::Console;

/// Console that records messages and counts awaited pauses instead of
/// blocking.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    messages: Arc<Mutex<Vec<String>>>,
    pauses: Arc<Mutex<usize>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn pauses(&self) -> usize {
        *self.pauses.lock().unwrap()
    }
}

impl Console for RecordingConsole {
    fn message(&mut self, line: &str) {
        self.messages.lock().unwrap().push(line.to_string());
    }

    fn pause(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        let pauses = Arc::clone(&self.pauses);
        // Counted only when the launcher actually awaits the pause.
        Box::pin(async move {
            *pauses.lock().unwrap() += 1;
        })
    }
}
