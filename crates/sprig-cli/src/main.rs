//! Sprig CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{error, LevelFilter};

use sprig_cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            cli.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    if let Err(err) = sprig_cli::run(&cli) {
        error!("{err}");
        process::exit(1);
    }
}
