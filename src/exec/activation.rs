// src/exec/activation.rs

//! Virtual environment activation.
//!
//! Activating a venv only changes environment variables: `VIRTUAL_ENV` is
//! set, the venv's script directory goes first on `PATH`, and `PYTHONHOME`
//! is dropped. We apply those changes to the child's environment instead of
//! the launcher's own.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::exec::Invocation;
use crate::fs::FileSystem;

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[cfg(windows)]
const ACTIVATE_ENTRY: &str = "activate.bat";
#[cfg(not(windows))]
const ACTIVATE_ENTRY: &str = "activate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    venv: PathBuf,
}

impl Activation {
    pub fn for_venv(venv: impl Into<PathBuf>) -> Self {
        Self { venv: venv.into() }
    }

    pub fn venv(&self) -> &Path {
        &self.venv
    }

    /// Directory holding the venv's interpreter and activation scripts.
    pub fn bin_dir(&self) -> PathBuf {
        self.venv.join(BIN_DIR)
    }

    /// The activation script whose presence marks a usable venv.
    pub fn entry_point(&self) -> PathBuf {
        self.bin_dir().join(ACTIVATE_ENTRY)
    }

    pub fn is_present(&self, fs: &dyn FileSystem) -> bool {
        fs.is_file(&self.entry_point())
    }

    /// Resolve a bare interpreter name to the venv's copy when it exists,
    /// otherwise leave it bare for the OS to search the activated `PATH`.
    pub fn resolve_program(&self, name: &str, fs: &dyn FileSystem) -> PathBuf {
        let bin = self.bin_dir();
        let mut candidates = vec![bin.join(name)];
        if cfg!(windows) && Path::new(name).extension().is_none() {
            candidates.insert(0, bin.join(format!("{name}.exe")));
        }

        match candidates.into_iter().find(|c| fs.is_file(c)) {
            Some(found) => found,
            None => {
                debug!(interpreter = name, venv = %self.venv.display(), "interpreter not in venv; relying on PATH");
                PathBuf::from(name)
            }
        }
    }

    /// Apply the activation's environment changes to `invocation`.
    ///
    /// `inherited_path` is the `PATH` the child would otherwise see.
    pub fn apply(&self, invocation: &mut Invocation, inherited_path: Option<OsString>) -> Result<()> {
        let mut dirs = vec![self.bin_dir()];
        if let Some(path) = inherited_path {
            dirs.extend(std::env::split_paths(&path));
        }
        let joined = std::env::join_paths(dirs).context("building activated PATH")?;

        invocation.set_env("VIRTUAL_ENV", self.venv.as_os_str());
        invocation.set_env("PATH", joined);
        invocation.remove_env("PYTHONHOME");
        Ok(())
    }
}
