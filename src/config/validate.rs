// src/config/validate.rs

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::model::{ConfigFile, LaunchConfig, LaunchPolicy, LauncherConfig, RawConfigFile};
use crate::errors::{LaunchError, Result};
use crate::types::PolicyKind;

/// Interpreter name used inside an activated environment when the profile
/// doesn't name one.
pub const DEFAULT_VENV_INTERPRETER: &str = "python";

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_launchers(&raw)?;

        let mut profiles = BTreeMap::new();
        for (name, launcher) in raw.launcher {
            let validated = validate_launcher(&name, launcher)?;
            profiles.insert(name, validated);
        }

        Ok(ConfigFile::new_unchecked(profiles))
    }
}

fn ensure_has_launchers(cfg: &RawConfigFile) -> Result<()> {
    if cfg.launcher.is_empty() {
        return Err(LaunchError::ConfigError(
            "config must contain at least one [launcher.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_launcher(name: &str, raw: LauncherConfig) -> Result<LaunchConfig> {
    if raw.script.as_os_str().is_empty() {
        return Err(config_error(name, "`script` must not be empty"));
    }
    if raw.log.as_os_str().is_empty() {
        return Err(config_error(name, "`log` must not be empty"));
    }

    let policy = match raw.policy {
        PolicyKind::Interactive => {
            let venv = raw
                .venv
                .filter(|v| !v.as_os_str().is_empty())
                .ok_or_else(|| config_error(name, "policy \"interactive\" requires `venv`"))?;
            let interpreter = raw
                .interpreter
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_VENV_INTERPRETER.to_string());
            LaunchPolicy::Interactive { venv, interpreter }
        }
        PolicyKind::Unattended => {
            if raw.venv.is_some() {
                return Err(config_error(
                    name,
                    "policy \"unattended\" does not activate environments; remove `venv`",
                ));
            }
            let interpreter = raw
                .interpreter
                .filter(|i| !i.trim().is_empty())
                .ok_or_else(|| {
                    config_error(name, "policy \"unattended\" requires `interpreter`")
                })?;
            LaunchPolicy::Unattended {
                interpreter: PathBuf::from(interpreter),
            }
        }
    };

    Ok(LaunchConfig {
        name: name.to_string(),
        working_dir: raw.working_dir,
        policy,
        script: raw.script,
        args: raw.args,
        log_path: raw.log,
    })
}

fn config_error(name: &str, msg: &str) -> LaunchError {
    LaunchError::ConfigError(format!("launcher '{name}': {msg}"))
}
