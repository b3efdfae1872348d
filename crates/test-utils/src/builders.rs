#![allow(dead_code)]

use std::path::PathBuf;

use launchlog::config::{LaunchConfig, LaunchPolicy};

/// Builder for `LaunchConfig` to simplify test setup.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    /// Interactive profile using `venv` and the default `python` interpreter.
    pub fn interactive(venv: &str) -> Self {
        Self::with_policy(LaunchPolicy::Interactive {
            venv: PathBuf::from(venv),
            interpreter: "python".to_string(),
        })
    }

    /// Unattended profile calling `interpreter` directly.
    pub fn unattended(interpreter: &str) -> Self {
        Self::with_policy(LaunchPolicy::Unattended {
            interpreter: PathBuf::from(interpreter),
        })
    }

    fn with_policy(policy: LaunchPolicy) -> Self {
        Self {
            config: LaunchConfig {
                name: "test".to_string(),
                working_dir: None,
                policy,
                script: PathBuf::from("job.py"),
                args: vec![],
                log_path: PathBuf::from("job.log"),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.name = name.to_string();
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.working_dir = Some(dir.into());
        self
    }

    pub fn script(mut self, script: impl Into<PathBuf>) -> Self {
        self.config.script = script.into();
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.config.args.push(arg.to_string());
        self
    }

    pub fn log(mut self, log: impl Into<PathBuf>) -> Self {
        self.config.log_path = log.into();
        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}
