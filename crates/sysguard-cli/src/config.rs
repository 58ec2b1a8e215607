//! Configuration file loading.
//!
//! A single JSON file holds addresses, device lists and tool paths. The
//! SMTP credential can be supplied through the environment instead, so
//! the file on disk never has to contain it.

use std::path::Path;

use thiserror::Error;

use sysguard_core::settings::Settings;

/// Environment variable overriding `smtp.password` from the config file.
pub const SMTP_PASSWORD_ENV: &str = "SYSGUARD_SMTP_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("cannot parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Load settings from `path`, applying the credential env override.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let settings: Settings = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(apply_env_override(
        settings,
        std::env::var(SMTP_PASSWORD_ENV).ok(),
    ))
}

fn apply_env_override(mut settings: Settings, password: Option<String>) -> Settings {
    if let Some(password) = password {
        settings.smtp.password = password;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"disks": {{"devices": ["/dev/sda"]}}, "smtp": {{"sender": "a@b.c", "recipient": "d@e.f"}}}}"#
        )
        .unwrap();

        let settings = load(file.path()).unwrap();
        assert_eq!(settings.disks.devices, vec!["/dev/sda".to_string()]);
        assert_eq!(settings.smtp.host, "smtp.gmail.com");
        assert_eq!(settings.disks.smartctl, "smartctl");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("/nonexistent/sysguard.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_override_replaces_file_credential() {
        let mut settings = Settings::default();
        settings.smtp.password = "from-file".to_string();

        let kept = apply_env_override(settings.clone(), None);
        assert_eq!(kept.smtp.password, "from-file");

        let overridden = apply_env_override(settings, Some("from-env".to_string()));
        assert_eq!(overridden.smtp.password, "from-env");
    }
}
