//! CLI-specific error type and exit-code mapping.

use thiserror::Error;

use sysguard_core::ports::MailError;
use sysguard_core::services::{PipelineError, VpnTriggerError};
use sysguard_core::settings::SettingsError;
use sysguard_runtime::PrivilegeError;

use crate::config::ConfigError;

/// CLI-facing error, one variant per failure category.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing elevated privileges (precondition, checked before any stage).
    #[error("{0}")]
    Privilege(String),

    /// Configuration file or settings problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// External tool invocation failure (smartctl, iwconfig, systemctl).
    #[error("Process error: {0}")]
    Process(String),

    /// Encryption failure; the plaintext report was not sent.
    #[error("Encryption error: {0}")]
    Encrypt(String),

    /// Mail submission failure.
    #[error("Delivery error: {0}")]
    Deliver(String),
}

impl CliError {
    /// Map error to appropriate exit code (sysexits.h conventions).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliError::Privilege(_) => 77, // EX_NOPERM
            CliError::Config(_) => 78,    // EX_CONFIG
            CliError::Process(_) => 71,   // EX_OSERR
            CliError::Encrypt(_) => 70,   // EX_SOFTWARE
            CliError::Deliver(_) => 69,   // EX_UNAVAILABLE
        }
    }
}

impl From<PrivilegeError> for CliError {
    fn from(err: PrivilegeError) -> Self {
        CliError::Privilege(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Probe(e) => CliError::Process(e.to_string()),
            PipelineError::Encrypt(e) => CliError::Encrypt(e.to_string()),
            PipelineError::Deliver(e) => CliError::Deliver(e.to_string()),
        }
    }
}

impl From<VpnTriggerError> for CliError {
    fn from(err: VpnTriggerError) -> Self {
        CliError::Process(err.to_string())
    }
}

impl From<MailError> for CliError {
    fn from(err: MailError) -> Self {
        match err {
            // Bad addresses come from the config file, not the network.
            MailError::Envelope(msg) => CliError::Config(msg),
            MailError::Transport(msg) => CliError::Deliver(msg),
        }
    }
}
