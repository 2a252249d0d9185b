//! CLI arguments and subcommands for hastatus.
//!
//! This module defines the command-line interface structure using the clap
//! library, including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Output format for status rendering
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "hastatus",
    about = "Structured status viewer for HAProxy stats sockets",
    long_about = "Structured status viewer for HAProxy stats sockets.\n\n\
                  Queries a HAProxy control socket for its statistics table and \
                  classifies every row into a typed frontend/backend/server entity \
                  with a normalized health state, so operators and tooling never \
                  have to parse the raw CSV themselves.",
    version = "0.1.0",
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the HAProxy stats socket
    #[arg(short = 's', long)]
    pub socket: Option<PathBuf>,

    /// Socket read/write timeout in milliseconds (0 = block indefinitely)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output format for status rendering
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one snapshot and render the status map and entities (default)
    Status,
    /// Fetch and parse one snapshot, report counts, exit non-zero on failure
    Check,
    /// Dump the raw stats CSV exactly as returned by the socket
    Raw,
}
