//! Execution plans
//!
//! A plan wraps the resolved, ordered command list and the effective
//! concurrency mode for one invocation. Variable-producing commands are
//! captured synchronously first, then the remaining commands run under the
//! mode's concurrency policy.

use crate::error::ExecutionResult;
use crate::runner::command::Command;
use crate::runner::exec::{execute_concurrent, execute_sync, Environ};
use crate::runner::task::TaskKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Environment variable carrying the forwarded CLI arguments
pub const RUNARGS_VAR: &str = "RUNARGS";

/// Environment variable naming a dotenv file to layer over the environment
pub const RUNVARS_VAR: &str = "RUNVARS";

/// A fully resolved execution plan
#[derive(Debug, Clone)]
pub struct Plan {
    /// Ordered command list (setup variables first, then general leaves)
    pub commands: Vec<Command>,

    /// Effective concurrency mode
    pub mode: TaskKind,
}

impl Plan {
    /// Create a plan from a command list and a mode
    pub fn new(commands: Vec<Command>, mode: TaskKind) -> Self {
        Plan { commands, mode }
    }

    /// Render a human-readable explanation of the plan
    pub fn explain(&self) -> String {
        let mut lines = Vec::new();
        let mut plain = true;
        for command in &self.commands {
            if !command.is_variable()
                && matches!(
                    self.mode,
                    TaskKind::Sequence | TaskKind::Parallel | TaskKind::Multiplex
                )
            {
                if plain {
                    lines.push(format!("[{}]", self.mode.label().to_uppercase()));
                }
                plain = false;
            }
            let code = match &command.variable {
                Some(variable) => format!("{}=\"{}\"", variable, command.code),
                None => command.code.clone(),
            };
            let indent = if plain { "" } else { "    " };
            lines.push(format!("{}$ {}", indent, code));
        }
        lines.join("\n")
    }

    /// Execute the plan
    ///
    /// Captures variable commands one at a time into `environ`, then runs
    /// the remaining commands under the mode's concurrency policy. The
    /// wall-clock duration of the general phase is logged unless quiet.
    pub fn execute(
        &self,
        argv: &[String],
        environ: &mut Environ,
        quiet: bool,
        faketty: bool,
        runvars: Option<&Path>,
    ) -> ExecutionResult<()> {
        let (variables, generals): (Vec<Command>, Vec<Command>) = self
            .commands
            .iter()
            .cloned()
            .partition(Command::is_variable);

        // Variables: capture sequentially so later commands see earlier
        // values
        let varnames: Vec<String> = variables.iter().filter_map(|c| c.variable.clone()).collect();
        execute_sync(&variables, environ, quiet)?;

        // Query variable shortcut
        if generals.is_empty() && !variables.is_empty() {
            if let Some(name) = varnames.last() {
                println!("{}", environ.get(name).map(String::as_str).unwrap_or(""));
            }
            return Ok(());
        }

        // Update environ
        environ.insert(RUNARGS_VAR.to_string(), argv.join(" "));
        let runvars = runvars
            .map(Path::to_path_buf)
            .or_else(|| environ.get(RUNVARS_VAR).filter(|p| !p.is_empty()).map(PathBuf::from));
        if let Some(path) = runvars {
            load_runvars(&path, environ)?;
        }

        // Log prepared
        let start = Instant::now();
        if !quiet {
            let items: Vec<String> = varnames
                .iter()
                .map(String::as_str)
                .chain([RUNARGS_VAR])
                .map(|name| {
                    format!("{}={}", name, environ.get(name).map(String::as_str).unwrap_or(""))
                })
                .collect();
            println!("[run] Prepared \"{}\"", items.join("; "));
        }

        // Dispatch per mode
        match self.mode {
            TaskKind::Parallel => execute_concurrent(&generals, environ, false, quiet, faketty)?,
            TaskKind::Multiplex => execute_concurrent(&generals, environ, true, quiet, faketty)?,
            _ => execute_sync(&generals, environ, quiet)?,
        }

        // Log finished
        if !quiet {
            println!("[run] Finished in {:.3} seconds", start.elapsed().as_secs_f64());
        }

        Ok(())
    }
}

/// Layer a dotenv-style file over the environment
fn load_runvars(path: &Path, environ: &mut Environ) -> ExecutionResult<()> {
    use crate::error::ExecutionError;

    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ExecutionError::Environment(format!("{}: {}", path.display(), e)))?;
    for entry in entries {
        let (key, value) =
            entry.map_err(|e| ExecutionError::Environment(format!("{}: {}", path.display(), e)))?;
        environ.insert(key, value);
    }
    Ok(())
}
