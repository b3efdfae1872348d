// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::PolicyKind;

/// Raw configuration as read from a TOML file, before validation.
///
/// ```toml
/// [launcher.gold]
/// policy = "interactive"
/// working_dir = "C:\\apps\\gold"
/// venv = "venv"
/// script = "gold.py"
/// log = "gold.log"
///
/// [launcher.pepper]
/// policy = "unattended"
/// interpreter = "C:\\Python312\\python.exe"
/// script = "C:\\apps\\pepper\\pepper4.py"
/// args = ["--commodities", "black-pepper,rubber,arecanut"]
/// log = "C:\\apps\\pepper\\pepper.log"
/// ```
///
/// Every value is a literal; nothing is interpolated or read from the
/// environment.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// All profiles from `[launcher.<name>]`, keyed by profile name.
    #[serde(default)]
    pub launcher: BTreeMap<String, LauncherConfig>,
}

/// `[launcher.<name>]` section, as written.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    /// `"interactive"` or `"unattended"`.
    pub policy: PolicyKind,

    /// Directory the child runs in. Relative paths below resolve against it.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,

    /// Virtual environment root. Required for `interactive`, rejected for
    /// `unattended`.
    #[serde(default)]
    pub venv: Option<PathBuf>,

    /// For `interactive`: bare interpreter name looked up through the
    /// activated environment (default `python`).
    /// For `unattended`: full path to the interpreter binary (required).
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Script handed to the interpreter.
    pub script: PathBuf,

    /// Fixed arguments appended after the script path.
    #[serde(default)]
    pub args: Vec<String>,

    /// Append-only run log.
    pub log: PathBuf,
}

/// Interpreter resolution, tagged by launch policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPolicy {
    /// Activate `venv`, then run the bare `interpreter` name inside it.
    /// Pauses for the operator on any failure.
    Interactive { venv: PathBuf, interpreter: String },
    /// Run `interpreter` directly. Never pauses, always logs completion.
    Unattended { interpreter: PathBuf },
}

impl LaunchPolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            LaunchPolicy::Interactive { .. } => PolicyKind::Interactive,
            LaunchPolicy::Unattended { .. } => PolicyKind::Unattended,
        }
    }
}

/// A validated, immutable launcher profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub name: String,
    pub working_dir: Option<PathBuf>,
    pub policy: LaunchPolicy,
    pub script: PathBuf,
    pub args: Vec<String>,
    pub log_path: PathBuf,
}

impl LaunchConfig {
    /// Resolve `path` against the working directory when it is relative.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn resolved_log_path(&self) -> PathBuf {
        self.resolve(&self.log_path)
    }

    pub fn resolved_script(&self) -> PathBuf {
        self.resolve(&self.script)
    }
}

/// Validated set of profiles.
///
/// Built from [`RawConfigFile`] via `TryFrom` (see `validate.rs`) or from the
/// compiled-in defaults in `builtin.rs`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    profiles: BTreeMap<String, LaunchConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(profiles: BTreeMap<String, LaunchConfig>) -> Self {
        Self { profiles }
    }

    pub fn get(&self, name: &str) -> Option<&LaunchConfig> {
        self.profiles.get(name)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &LaunchConfig> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
