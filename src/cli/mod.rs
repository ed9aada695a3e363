//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Prahari using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Prahari - PII detection and masking
#[derive(Parser, Debug)]
#[command(name = "prahari")]
#[command(version, about, long_about = None)]
#[command(author = "Prahari Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "prahari.toml", env = "PRAHARI_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PRAHARI_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect and mask PII in a text
    Mask(commands::mask::MaskArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
