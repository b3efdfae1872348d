// src/config/builtin.rs

//! Compiled-in launcher profiles.
//!
//! These carry the fixed values the launcher ships with. A `--config` file
//! replaces them entirely.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::model::{ConfigFile, LaunchConfig, LaunchPolicy};
use crate::config::validate::DEFAULT_VENV_INTERPRETER;

const GOLD_INSTALL_DIR: &str = r"C:\apps\gold";
const GOLD_VENV: &str = "venv";
const GOLD_SCRIPT: &str = "gold.py";
const GOLD_LOG: &str = "gold_log.txt";

const PEPPER_INTERPRETER: &str = r"C:\Python312\python.exe";
const PEPPER_SCRIPT: &str = r"C:\apps\pepper\pepper4.py";
const PEPPER_COMMODITIES: &str = "black-pepper,rubber,arecanut";
const PEPPER_OUTPUT: &str = r"C:\apps\pepper\kannur_prices.html";
const PEPPER_LOG: &str = r"C:\apps\pepper\pepper_log.txt";

/// Interactive profile: gold price service inside its virtual environment.
pub fn gold() -> LaunchConfig {
    LaunchConfig {
        name: "gold".to_string(),
        working_dir: Some(PathBuf::from(GOLD_INSTALL_DIR)),
        policy: LaunchPolicy::Interactive {
            venv: PathBuf::from(GOLD_VENV),
            interpreter: DEFAULT_VENV_INTERPRETER.to_string(),
        },
        script: PathBuf::from(GOLD_SCRIPT),
        args: Vec::new(),
        log_path: PathBuf::from(GOLD_LOG),
    }
}

/// Unattended profile: scheduled commodity price scrape.
pub fn pepper() -> LaunchConfig {
    LaunchConfig {
        name: "pepper".to_string(),
        working_dir: None,
        policy: LaunchPolicy::Unattended {
            interpreter: PathBuf::from(PEPPER_INTERPRETER),
        },
        script: PathBuf::from(PEPPER_SCRIPT),
        args: vec![
            "--commodities".to_string(),
            PEPPER_COMMODITIES.to_string(),
            "--auto-variants".to_string(),
            "--output".to_string(),
            PEPPER_OUTPUT.to_string(),
        ],
        log_path: PathBuf::from(PEPPER_LOG),
    }
}

pub fn builtin_profiles() -> ConfigFile {
    let profiles: BTreeMap<String, LaunchConfig> = [gold(), pepper()]
        .into_iter()
        .map(|p| (p.name.clone(), p))
        .collect();
    ConfigFile::new_unchecked(profiles)
}
