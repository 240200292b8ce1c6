use std::io;

use log::{LevelFilter, error};
use quiz_core::QuizConfig;

fn init_logging() {
    // Logs go to stderr so they never mix with the quiz transcript.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .target(env_logger::Target::Stderr)
        .parse_default_env()
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuizConfig::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    services::run_from_config(&config, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}
