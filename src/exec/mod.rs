// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] describes the child command line, its directory and its
//!   environment overrides.
//! - [`activation`] turns a virtual environment into environment overrides
//!   and resolves the interpreter inside it.
//! - [`backend`] provides the `ProcessRunner` trait the launcher depends on.
//! - [`runner`] is the `tokio::process` implementation used in production.

pub mod activation;
pub mod backend;
pub mod invocation;
pub mod runner;

pub use activation::Activation;
pub use backend::{ProcessRunner, RunOutput};
pub use invocation::Invocation;
pub use runner::RealProcessRunner;
