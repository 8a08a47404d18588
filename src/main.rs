//! CText Editor
//!
//! A small terminal text editor.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use ctext::app::{self, App, AppError, CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Load configuration with precedence: CLI > file > defaults
    let config = match Config::load_with_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = app::init_logging(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting CText");

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("ctext: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<(), AppError> {
    App::new(args, config)?.run()
}
