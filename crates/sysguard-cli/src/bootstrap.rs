//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where real adapters are wired into the
//! core pipelines: smartctl, gpg and the SMTP transport for the disk
//! alert run; iwconfig and systemctl for the wireless trigger. Handlers
//! receive fully-composed services and never touch infrastructure types.

use std::sync::Arc;
use std::time::Duration;

use sysguard_core::services::{HealthPipeline, VpnTrigger};
use sysguard_core::settings::Settings;
use sysguard_runtime::{GpgCipher, IwconfigStatus, SmartctlProbe, SmtpMailer, SystemctlVpn};

use crate::error::CliError;

/// Compose the disk health alert pipeline from settings.
pub fn health_pipeline(settings: &Settings) -> Result<HealthPipeline, CliError> {
    let command_timeout = Duration::from_secs(settings.command_timeout_secs);

    let probe = Arc::new(SmartctlProbe::new(
        settings.disks.smartctl.clone(),
        command_timeout,
    ));
    let cipher = Arc::new(GpgCipher::new(
        settings.gpg.binary.clone(),
        settings.gpg.homedir.clone(),
        settings
            .gpg
            .effective_recipient(&settings.smtp.recipient)
            .to_string(),
        command_timeout,
    ));
    let mailer = Arc::new(SmtpMailer::new(&settings.smtp)?);

    Ok(HealthPipeline::new(
        probe,
        cipher,
        mailer,
        settings.smtp.subject.clone(),
    ))
}

/// Compose the wireless VPN trigger from settings.
#[must_use]
pub fn vpn_trigger(settings: &Settings) -> VpnTrigger {
    let command_timeout = Duration::from_secs(settings.command_timeout_secs);

    VpnTrigger::new(
        Arc::new(IwconfigStatus::new(
            settings.wifi.iwconfig.clone(),
            command_timeout,
        )),
        Arc::new(SystemctlVpn::new(
            settings.wifi.tunnel_unit.clone(),
            command_timeout,
        )),
        settings.wifi.trusted_ssids.clone(),
    )
}
