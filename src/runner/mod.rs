//! Task-tree resolution and command execution
//!
//! This module builds the task tree from raw descriptors, resolves
//! navigation arguments into execution plans, and runs those plans under
//! the sequential and concurrent executors.

pub mod command;
pub mod exec;
pub mod help;
pub mod plan;
pub mod task;

// Re-export main types
pub use command::*;
pub use exec::*;
pub use plan::*;
pub use task::*;
