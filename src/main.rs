use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = runr::cli::run() {
        eprintln!("{}", e.to_string().bold());
        process::exit(1);
    }
}
