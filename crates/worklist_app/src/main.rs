mod config;
mod console;
mod workflow;

use std::path::Path;

use colored::Colorize;

use crate::workflow::Mode;

fn main() {
    batch_logging::initialize_terminal();

    let mode = if std::env::args().any(|arg| arg == "--simulate") {
        Mode::Simulated
    } else {
        Mode::Http
    };
    let config = config::load(Path::new("."));

    if let Err(err) = workflow::run(mode, &config) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
