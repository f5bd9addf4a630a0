//! Runr - a YAML task-tree runner
//!
//! Runr turns a declarative, nested task description into a runnable plan of
//! shell commands and executes that plan sequentially, in parallel, or in a
//! multiplexed (interleaved, colorized) streaming mode.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{Result, RunrError};

/// Current version of runr
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
