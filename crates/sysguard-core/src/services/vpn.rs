//! Wireless-network VPN trigger.
//!
//! One-shot logic meant to run from a network-online systemd unit: look at
//! the current wireless association and start the tunnel unit when the
//! machine is on a network outside the trusted list.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::ports::{VpnControl, VpnError, WifiState, WirelessError, WirelessStatus};

#[derive(Debug, Error)]
pub enum VpnTriggerError {
    #[error("wireless status check failed: {0}")]
    Wireless(#[from] WirelessError),

    #[error("tunnel start failed: {0}")]
    Vpn(#[from] VpnError),
}

/// How a trigger run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VpnOutcome {
    /// Not associated with any wireless network; nothing to do.
    NoWireless,
    /// On a trusted network; tunnel left alone.
    TrustedNetwork { ssid: String },
    /// Foreign network detected; tunnel unit started.
    TunnelStarted { ssid: String },
}

pub struct VpnTrigger {
    wireless: Arc<dyn WirelessStatus>,
    vpn: Arc<dyn VpnControl>,
    trusted_ssids: Vec<String>,
}

impl VpnTrigger {
    #[must_use]
    pub fn new(
        wireless: Arc<dyn WirelessStatus>,
        vpn: Arc<dyn VpnControl>,
        trusted_ssids: Vec<String>,
    ) -> Self {
        Self {
            wireless,
            vpn,
            trusted_ssids,
        }
    }

    /// Run one trigger pass.
    pub async fn run(&self) -> Result<VpnOutcome, VpnTriggerError> {
        match self.wireless.current_network().await? {
            WifiState::Disconnected => {
                info!("not connected to any wireless network");
                Ok(VpnOutcome::NoWireless)
            }
            WifiState::Connected(ssid) if self.trusted_ssids.contains(&ssid) => {
                info!(ssid, "trusted network, leaving tunnel alone");
                Ok(VpnOutcome::TrustedNetwork { ssid })
            }
            WifiState::Connected(ssid) => {
                info!(ssid, "foreign network detected, starting tunnel");
                self.vpn.start_tunnel().await?;
                Ok(VpnOutcome::TunnelStarted { ssid })
            }
        }
    }
}
