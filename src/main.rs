//! hastatus - version 0.1.0
//!
//! Structured status viewer for HAProxy stats sockets. This is the main entry
//! point: it initializes logging, resolves configuration, and dispatches to
//! the requested subcommand.

mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing::{error, Level};

use cli::{Args, Commands, LogLevel, OutputFormat};
use commands::{command_check, command_raw, command_status};
use config::{resolve_config, show_config, validate_effective_config, Config};

/// Initializes tracing logging subsystem with configured log level.
fn setup_logging(args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => Level::ERROR,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Effective output format (CLI > config > text).
fn resolve_format(config: &Config) -> OutputFormat {
    match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to resolve configuration: {e}");
            std::process::exit(1);
        }
    };

    if args.show_config {
        if let Err(e) = show_config(&config, args.config_format.clone()) {
            error!("Failed to render configuration: {e}");
            std::process::exit(1);
        }
        return;
    }

    if args.check_config {
        match validate_effective_config(&config) {
            Ok(()) => {
                println!("Configuration valid");
                return;
            }
            Err(e) => {
                error!("Configuration invalid: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = validate_effective_config(&config) {
        error!("Configuration invalid: {e}");
        std::process::exit(1);
    }

    let format = resolve_format(&config);
    let result = match args.command.unwrap_or(Commands::Status) {
        Commands::Status => command_status(&config, &format),
        Commands::Check => command_check(&config),
        Commands::Raw => command_raw(&config),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
