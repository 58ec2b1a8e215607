//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line interface definition for sysguard.
#[derive(Parser)]
#[command(name = "sysguard")]
#[command(about = "SMART disk alerting and wifi-triggered VPN control")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, global = true, default_value = "/etc/sysguard/config.json")]
    pub config: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe the configured disks and mail an encrypted alert if any fail
    Smart,
    /// Start the VPN tunnel when connected to an untrusted wireless network
    Wifi,
    /// Load the configuration and print the effective (redacted) values
    CheckConfig,
}
