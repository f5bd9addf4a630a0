//! Configuration loading
//!
//! This module handles loading of run.yml configuration files into raw
//! task descriptors and run options.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
