use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which launch sequence a profile follows.
///
/// - `Interactive`: activate a virtual environment first, refuse to run when
///   the activation entry point is missing, and pause for the operator when
///   anything fails.
/// - `Unattended`: call a fully-qualified interpreter directly, never pause,
///   and always close the run with a `Finished.` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Interactive,
    Unattended,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Interactive => "interactive",
            PolicyKind::Unattended => "unattended",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interactive" => Ok(PolicyKind::Interactive),
            "unattended" => Ok(PolicyKind::Unattended),
            other => Err(format!(
                "invalid policy: {other} (expected \"interactive\" or \"unattended\")"
            )),
        }
    }
}

/// How the child process ended, as seen by the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildExit {
    /// The child ran and exited with this code.
    Exited(i32),
    /// The child could not be started at all; carries the OS error text.
    LaunchFailed(String),
}

impl ChildExit {
    /// Exit code used for reporting. Launch failures and signal deaths map
    /// to `-1`.
    pub fn code(&self) -> i32 {
        match self {
            ChildExit::Exited(code) => *code,
            ChildExit::LaunchFailed(_) => -1,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, ChildExit::Exited(0))
    }
}
