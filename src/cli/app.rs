//! Main CLI application
//!
//! The driver is the single point of termination: the core returns errors
//! as values and this layer surfaces one fatal message per run via main.

use crate::config::{load_config, DEFAULT_CONFIG_PATH};
use crate::error::Result;
use crate::runner::{base_environ, help, Resolution, TaskTree};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Build the clap command
fn build_command() -> Command {
    Command::new("runr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A YAML task-tree runner")
        .arg(
            Arg::new("config-path")
                .long("config-path")
                .value_name("PATH")
                .help("Path to the run.yml configuration file")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("complete")
                .long("complete")
                .help("List the task names at the given path instead of executing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Task path, filters (=name, +name, -name), and help marker (?)")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let matches = build_command().get_matches();
    run_with_matches(&matches)
}

fn run_with_matches(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("config-path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let argv: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let config = load_config(&path)?;
    let tree = TaskTree::build(&config.root)?;

    // Completion listing
    if matches.get_flag("complete") {
        for name in tree.complete(tree.root(), &argv) {
            println!("{}", name);
        }
        return Ok(());
    }

    match tree.resolve(tree.root(), &argv)? {
        Resolution::Help(view) => {
            help::print_help(&tree, &view);
            Ok(())
        }
        Resolution::Execute { plan, task, argv } => {
            let mut environ = base_environ();
            let quiet = tree.node(task).quiet;
            plan.execute(
                &argv,
                &mut environ,
                quiet,
                config.options.faketty,
                config.options.runvars.as_deref(),
            )?;
            Ok(())
        }
    }
}
