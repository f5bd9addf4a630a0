//! Resolved shell commands

/// A single resolved shell command
///
/// Commands are created fresh per resolution and never persisted. The code
/// string is rewritten in place during argument placeholder normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Qualified task name (space-joined ancestor path)
    pub name: String,

    /// Shell code passed verbatim to the shell
    pub code: String,

    /// Capture-target variable name, set when the command's trimmed output
    /// is bound into the environment instead of streamed
    pub variable: Option<String>,
}

impl Command {
    /// Create a new command
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        variable: Option<String>,
    ) -> Self {
        Command {
            name: name.into(),
            code: code.into(),
            variable,
        }
    }

    /// Check whether this command captures its output into a variable
    pub fn is_variable(&self) -> bool {
        self.variable.is_some()
    }
}
