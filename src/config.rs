//! Configuration management for the postcode tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Output format and log level selection

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// Command-line arguments for the postcode tool
#[derive(Debug, Parser)]
#[command(name = "postcode")]
#[command(about = "Validate and format UK postcodes")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        global = true,
        help = "Log level (trace, debug, info, warn, error, off)"
    )]
    pub log_level: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether each postcode is valid
    Validate {
        /// Postcodes to check; read from stdin, one per line, when omitted
        postcodes: Vec<String>,
    },
    /// Print each postcode as "OUTWARD INWARD"
    Format {
        /// Postcodes to format; read from stdin, one per line, when omitted
        postcodes: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Validate,
    Format,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    /// Postcodes given on the command line; empty means read stdin
    pub inputs: Vec<String>,
    pub output: OutputFormat,
    pub log_level: LevelFilter,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = args
            .log_level
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid log level '{}'", args.log_level))?;

        let (mode, inputs) = match args.command {
            Command::Validate { postcodes } => (Mode::Validate, postcodes),
            Command::Format { postcodes } => (Mode::Format, postcodes),
        };

        Ok(Config {
            mode,
            inputs,
            output: args.output,
            log_level,
        })
    }

    pub fn reads_stdin(&self) -> bool {
        self.inputs.is_empty()
    }
}
