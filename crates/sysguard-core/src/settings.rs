//! Settings types and validation.
//!
//! One immutable structure loaded at startup and passed into the pipeline
//! entry points. All fields carry serde defaults so a partial config file
//! still deserializes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default mail submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default bound on each external command invocation, in seconds.
/// `smartctl --all` on a dying disk can take a while.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// Default bound on the whole SMTP submission, in seconds.
pub const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 60;

/// Application settings, loaded once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub disks: DiskSettings,
    pub smtp: SmtpSettings,
    pub gpg: GpgSettings,
    pub wifi: WifiSettings,
    /// Bound on each external command invocation, in seconds.
    pub command_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disks: DiskSettings::default(),
            smtp: SmtpSettings::default(),
            gpg: GpgSettings::default(),
            wifi: WifiSettings::default(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
        }
    }
}

/// Which devices to check and with what.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiskSettings {
    /// Block device paths to probe, in order.
    pub devices: Vec<String>,
    /// Diagnostic tool binary (name or absolute path).
    pub smartctl: String,
}

impl Default for DiskSettings {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            smartctl: "smartctl".to_string(),
        }
    }
}

/// Mail submission endpoint and credential.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub sender: String,
    /// Sender credential. Prefer supplying this via the
    /// `SYSGUARD_SMTP_PASSWORD` environment variable over the config file.
    pub password: String,
    pub recipient: String,
    pub subject: String,
    pub timeout_secs: u64,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: DEFAULT_SMTP_PORT,
            sender: String::new(),
            password: String::new(),
            recipient: String::new(),
            subject: "Emergent: Disks have Failed SmartTest".to_string(),
            timeout_secs: DEFAULT_SMTP_TIMEOUT_SECS,
        }
    }
}

/// Encryption keyring and recipient identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GpgSettings {
    /// Keyring directory (`--homedir`); None means the gpg default.
    pub homedir: Option<String>,
    /// Recipient identity whose public key encrypts the report. Empty
    /// means "same as the mail recipient".
    pub recipient: String,
    pub binary: String,
}

impl Default for GpgSettings {
    fn default() -> Self {
        Self {
            homedir: None,
            recipient: String::new(),
            binary: "gpg".to_string(),
        }
    }
}

impl GpgSettings {
    /// Effective encryption recipient, falling back to the mail recipient.
    #[must_use]
    pub fn effective_recipient<'a>(&'a self, mail_recipient: &'a str) -> &'a str {
        if self.recipient.is_empty() {
            mail_recipient
        } else {
            &self.recipient
        }
    }
}

/// Wireless trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WifiSettings {
    /// SSIDs on which the tunnel is NOT started.
    pub trusted_ssids: Vec<String>,
    /// systemd unit to start on a foreign network.
    pub tunnel_unit: String,
    pub iwconfig: String,
}

impl Default for WifiSettings {
    fn default() -> Self {
        Self {
            trusted_ssids: Vec::new(),
            tunnel_unit: "wg-quick@wg0".to_string(),
            iwconfig: "iwconfig".to_string(),
        }
    }
}

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("device list is empty; nothing to probe")]
    NoDevices,

    #[error("sender address is not configured")]
    MissingSender,

    #[error("recipient address is not configured")]
    MissingRecipient,

    #[error("SMTP credential is not configured")]
    MissingCredential,

    #[error("SMTP port must be non-zero")]
    InvalidSmtpPort,

    #[error("command timeout must be non-zero")]
    ZeroTimeout,

    #[error("tunnel unit name is not configured")]
    MissingTunnelUnit,
}

/// Validate the fields the disk alert pipeline depends on.
pub fn validate_alert_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.disks.devices.is_empty() {
        return Err(SettingsError::NoDevices);
    }
    if settings.smtp.sender.trim().is_empty() {
        return Err(SettingsError::MissingSender);
    }
    if settings.smtp.recipient.trim().is_empty() {
        return Err(SettingsError::MissingRecipient);
    }
    if settings.smtp.password.is_empty() {
        return Err(SettingsError::MissingCredential);
    }
    if settings.smtp.port == 0 {
        return Err(SettingsError::InvalidSmtpPort);
    }
    if settings.command_timeout_secs == 0 || settings.smtp.timeout_secs == 0 {
        return Err(SettingsError::ZeroTimeout);
    }
    Ok(())
}

/// Validate the fields the wireless trigger depends on.
pub fn validate_wifi_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.wifi.tunnel_unit.trim().is_empty() {
        return Err(SettingsError::MissingTunnelUnit);
    }
    if settings.command_timeout_secs == 0 {
        return Err(SettingsError::ZeroTimeout);
    }
    Ok(())
}
