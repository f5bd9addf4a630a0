//! Process executors
//!
//! The synchronous executor runs one process at a time and is used for
//! variable capture and for directive/sequence plans. The concurrent
//! executor spawns every command at once; each pipe is drained by a reader
//! thread feeding line events into a single channel, so interleaving is
//! per-line and delivery-ordered.

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::command::Command;
use colored::{Color, Colorize};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command as Shell, Stdio};
use std::sync::mpsc;
use std::thread;

/// Shared environment mapping passed to spawned processes
pub type Environ = HashMap<String, String>;

/// Snapshot of the current process environment
pub fn base_environ() -> Environ {
    std::env::vars().collect()
}

/// Palette cycled round-robin over concurrent commands
const COLORS: &[Color] = &[
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::BrightCyan,
    Color::BrightYellow,
    Color::BrightGreen,
    Color::BrightMagenta,
    Color::BrightRed,
    Color::BrightBlue,
];

/// Color for the command at `index`
pub fn color_for(index: usize) -> Color {
    COLORS[index % COLORS.len()]
}

/// Wrap shell code in `script -qefc` when pseudo-tty streaming is requested
pub fn apply_faketty(code: &str, faketty: bool) -> String {
    if !faketty {
        return code.to_string();
    }
    format!("script -qefc '{}'", code.replace('\'', "'\\''"))
}

fn shell(code: &str, environ: &Environ) -> Shell {
    let mut command = Shell::new("sh");
    command.arg("-c").arg(code);
    command.env_clear();
    command.envs(environ);
    command
}

fn spawn_error(command: &Command, error: impl ToString) -> ExecutionError {
    ExecutionError::Spawn {
        code: command.code.clone(),
        error: error.to_string(),
    }
}

fn failure(command: &Command, status: Option<i32>) -> ExecutionError {
    ExecutionError::CommandFailed {
        code: command.code.clone(),
        status,
    }
}

/// Run commands one at a time, blocking on each
///
/// Variable commands have their stdout captured, trimmed, and written into
/// `environ` before the next command runs; other commands inherit the
/// console.
pub fn execute_sync(commands: &[Command], environ: &mut Environ, quiet: bool) -> ExecutionResult<()> {
    for command in commands {
        if !command.is_variable() && !quiet {
            println!("[run] Launched \"{}\"", command.code);
        }

        if let Some(name) = &command.variable {
            let output = shell(&command.code, environ)
                .stdin(Stdio::inherit())
                .stderr(Stdio::inherit())
                .output()
                .map_err(|e| spawn_error(command, e))?;
            if !output.status.success() {
                return Err(failure(command, output.status.code()));
            }
            let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
            environ.insert(name.clone(), value);
        } else {
            let status = shell(&command.code, environ)
                .status()
                .map_err(|e| spawn_error(command, e))?;
            if !status.success() {
                return Err(failure(command, status.code()));
            }
        }
    }
    Ok(())
}

enum Event {
    Line { index: usize, line: String },
    Eof { index: usize },
}

/// Run all commands concurrently with line-buffered streamed output
///
/// Multiplex mode prefixes every line with the owning command's qualified
/// name in its assigned color. The first non-zero exit kills the remaining
/// siblings and reports the failing command.
pub fn execute_concurrent(
    commands: &[Command],
    environ: &Environ,
    multiplex: bool,
    quiet: bool,
    faketty: bool,
) -> ExecutionResult<()> {
    if commands.is_empty() {
        return Ok(());
    }

    let (sender, receiver) = mpsc::channel();
    let mut children: Vec<Option<Child>> = Vec::with_capacity(commands.len());

    for (index, command) in commands.iter().enumerate() {
        if !quiet {
            println!("[run] Launched \"{}\"", command.code);
        }

        let code = apply_faketty(&command.code, faketty);
        let spawned = shell(&code, environ)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(error) => {
                // Cancel the siblings already launched
                for sibling in children.iter_mut().flatten() {
                    let _ = sibling.kill();
                }
                return Err(spawn_error(command, error));
            }
        };
        if let Some(stdout) = child.stdout.take() {
            spawn_reader(index, stdout, sender.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_reader(index, stderr, sender.clone());
        }
        children.push(Some(child));
    }
    drop(sender);

    // Single writer: draining one channel keeps lines whole and in
    // delivery order across processes
    let mut closed_pipes = vec![0usize; commands.len()];
    let mut finished = 0;
    for event in receiver {
        match event {
            Event::Line { index, line } => {
                print_line(&line, &commands[index].name, color_for(index), multiplex, quiet);
            }
            Event::Eof { index } => {
                closed_pipes[index] += 1;
                if closed_pipes[index] < 2 {
                    continue;
                }
                if let Some(mut child) = children[index].take() {
                    let status = child.wait().map_err(|e| spawn_error(&commands[index], e))?;
                    if !status.success() {
                        // Fail fast: cancel the remaining siblings
                        for sibling in children.iter_mut().flatten() {
                            let _ = sibling.kill();
                        }
                        return Err(failure(&commands[index], status.code()));
                    }
                    finished += 1;
                    if finished == commands.len() {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn spawn_reader(index: usize, stream: impl Read + Send + 'static, sender: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if sender.send(Event::Line { index, line }).is_err() {
                return;
            }
        }
        let _ = sender.send(Event::Eof { index });
    });
}

fn print_line(line: &str, name: &str, color: Color, multiplex: bool, quiet: bool) {
    let line = line.trim_end_matches('\r');
    if multiplex && !quiet {
        let prefix = format!("{} | ", name);
        print!("{}", prefix.as_str().color(color));
    }
    println!("{}", line);
}
