// src/config/mod.rs

//! Launcher profiles.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a profile file from disk (`loader.rs`).
//! - Check each profile is complete for its policy (`validate.rs`).
//! - Provide the compiled-in profiles (`builtin.rs`).

pub mod builtin;
pub mod loader;
pub mod model;
pub mod validate;

pub use builtin::builtin_profiles;
pub use loader::{load_and_validate, load_from_path, load_profiles};
pub use model::{ConfigFile, LaunchConfig, LaunchPolicy, LauncherConfig, RawConfigFile};
pub use validate::DEFAULT_VENV_INTERPRETER;
