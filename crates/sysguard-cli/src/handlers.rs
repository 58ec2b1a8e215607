//! Subcommand handlers.

use tracing::{info, warn};

use sysguard_core::services::{RunOutcome, VpnOutcome};
use sysguard_core::settings::{Settings, validate_alert_settings, validate_wifi_settings};
use sysguard_runtime::require_root;

use crate::bootstrap;
use crate::error::CliError;

/// `sysguard smart`: one pass of the disk health alert pipeline.
pub async fn smart(settings: &Settings) -> Result<(), CliError> {
    require_root()?;
    validate_alert_settings(settings)?;

    let pipeline = bootstrap::health_pipeline(settings)?;
    match pipeline.run(&settings.disks.devices).await? {
        RunOutcome::AllHealthy { probed } => {
            info!(probed, "all disks passed, no alert sent");
        }
        RunOutcome::AlertSent { failed } => {
            warn!(?failed, "encrypted alert submitted");
        }
    }
    Ok(())
}

/// `sysguard wifi`: one pass of the wireless VPN trigger.
pub async fn wifi(settings: &Settings) -> Result<(), CliError> {
    require_root()?;
    validate_wifi_settings(settings)?;

    match bootstrap::vpn_trigger(settings).run().await? {
        VpnOutcome::NoWireless => info!("no wireless association, nothing to do"),
        VpnOutcome::TrustedNetwork { ssid } => info!(ssid, "trusted network, nothing to do"),
        VpnOutcome::TunnelStarted { ssid } => warn!(ssid, "foreign network, tunnel started"),
    }
    Ok(())
}

/// `sysguard check-config`: print the effective settings (credential
/// redacted) and report what each pipeline would complain about.
///
/// Informational only: a host that uses just one of the two pipelines is
/// allowed to leave the other unconfigured, so validation findings are
/// printed rather than returned.
pub fn check_config(settings: &Settings) -> Result<(), CliError> {
    let mut redacted = settings.clone();
    if !redacted.smtp.password.is_empty() {
        redacted.smtp.password = "<set>".to_string();
    }
    let rendered = serde_json::to_string_pretty(&redacted)
        .map_err(|e| CliError::Config(e.to_string()))?;
    println!("{rendered}");

    match validate_alert_settings(settings) {
        Ok(()) => println!("smart: ok"),
        Err(e) => println!("smart: {e}"),
    }
    match validate_wifi_settings(settings) {
        Ok(()) => println!("wifi: ok"),
        Err(e) => println!("wifi: {e}"),
    }
    Ok(())
}
