//! Raw configuration data types
//!
//! These types are the loader's output: a nested tree of task descriptors
//! plus the free-form run options from the second YAML document. Sigils in
//! task names (`/`, `!`, `(...)`) are preserved here and interpreted later
//! during task-tree construction.

use serde::Deserialize;
use std::path::PathBuf;

/// Raw task body as written in the configuration
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// A leaf: opaque shell code passed verbatim to the shell
    Code(String),

    /// A composite: ordered sub-task descriptors
    Group(Vec<RawTask>),
}

/// A single raw task descriptor
///
/// One configuration key with its body and the description harvested from
/// the contiguous comment lines immediately above it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTask {
    /// Task name as written, sigils included
    pub name: String,

    /// Description derived from leading comment lines
    pub desc: String,

    /// Shell code or nested descriptors
    pub body: RawBody,
}

impl RawTask {
    /// Create a descriptor without a description
    pub fn new(name: impl Into<String>, body: RawBody) -> Self {
        RawTask {
            name: name.into(),
            desc: String::new(),
            body,
        }
    }
}

/// Run options from the second YAML document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Wrap concurrent commands in a pseudo-tty (`script -qefc`) so programs
    /// keep streaming line-buffered output when piped
    pub faketty: bool,

    /// Path to a dotenv-style file layered over the environment before the
    /// general phase
    pub runvars: Option<PathBuf>,
}
