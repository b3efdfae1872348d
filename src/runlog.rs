// src/runlog.rs

//! Append-only run log.
//!
//! Every write opens the file in append mode, writes, and closes it again.
//! Nothing here ever truncates, rotates or reads the log back.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Local};

use crate::errors::Result;
use crate::fs::FileSystem;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `==== Starting at <date> <time> ====`
pub fn start_line(now: &DateTime<Local>) -> String {
    format!("==== Starting at {} ====", now.format(TIMESTAMP_FORMAT))
}

/// `Finished. <date> <time>`
pub fn finished_line(now: &DateTime<Local>) -> String {
    format!("Finished. {}", now.format(TIMESTAMP_FORMAT))
}

/// `Application exited with error code <N>`
pub fn error_code_line(code: i32) -> String {
    format!("Application exited with error code {code}")
}

/// Writer for one launcher run.
///
/// Marker lines always start at the beginning of a line: if captured child
/// output stopped mid-line, a newline is inserted before the next marker.
#[derive(Debug)]
pub struct RunLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    at_line_start: AtomicBool,
}

impl RunLog {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            at_line_start: AtomicBool::new(true),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn start_marker(&self, now: &DateTime<Local>) -> Result<()> {
        self.line(&start_line(now))
    }

    pub fn finished_marker(&self, now: &DateTime<Local>) -> Result<()> {
        self.line(&finished_line(now))
    }

    /// Append one complete line.
    pub fn line(&self, text: &str) -> Result<()> {
        let mut buf = String::with_capacity(text.len() + 2);
        if !self.at_line_start.load(Ordering::Acquire) {
            buf.push('\n');
        }
        buf.push_str(text);
        buf.push('\n');

        self.fs.append(&self.path, buf.as_bytes())?;
        self.at_line_start.store(true, Ordering::Release);
        Ok(())
    }

    /// Terminate a partial output line so the next run starts cleanly.
    pub fn close_line(&self) -> Result<()> {
        if self.at_line_start.load(Ordering::Acquire) {
            return Ok(());
        }
        self.fs.append(&self.path, b"\n")?;
        self.at_line_start.store(true, Ordering::Release);
        Ok(())
    }

    /// Record that something else (the child, through an inherited handle)
    /// wrote to the log, leaving it at or away from a line start.
    pub fn written_externally(&self, ends_with_newline: bool) {
        self.at_line_start.store(ends_with_newline, Ordering::Release);
    }

    /// Append captured child output verbatim.
    pub fn output(&self, chunk: &[u8]) -> Result<()> {
        let Some(&last) = chunk.last() else {
            return Ok(());
        };
        self.fs.append(&self.path, chunk)?;
        self.at_line_start.store(last == b'\n', Ordering::Release);
        Ok(())
    }
}
