//! Core domain for sysguard: port traits, pipeline services and settings.
//!
//! This crate contains no process, network or filesystem code. External
//! collaborators (smartctl, gpg, the mail submission endpoint, iwconfig,
//! systemctl) are reached only through the traits in [`ports`]; the
//! runtime crate provides the real adapters and the CLI composes them.

pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use ports::{
    Alert, AlertMailer, CipherError, DiskProbe, HealthStatus, MailError, ProbeError,
    ReportCipher, VpnControl, VpnError, WifiState, WirelessError, WirelessStatus,
};
pub use services::{
    HealthPipeline, PipelineError, RunOutcome, VpnOutcome, VpnTrigger, VpnTriggerError,
};
pub use settings::{
    DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_SMTP_PORT, DiskSettings, GpgSettings, Settings,
    SettingsError, SmtpSettings, WifiSettings, validate_alert_settings, validate_wifi_settings,
};
