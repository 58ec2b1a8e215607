//! Wireless status and VPN control trait definitions.
//!
//! Used by the network-change trigger: read the current ESSID, and start
//! the tunnel unit when the machine is on a foreign network.

use async_trait::async_trait;
use thiserror::Error;

/// Current wireless association state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WifiState {
    /// No wireless association (`ESSID:off/any`).
    Disconnected,
    /// Associated with the named network.
    Connected(String),
}

/// Errors from querying wireless status.
#[derive(Debug, Error)]
pub enum WirelessError {
    /// The wireless status tool could not be invoked.
    #[error("failed to query wireless status: {0}")]
    Invocation(String),

    /// The tool ran but its output carried no recognisable ESSID field.
    #[error("unrecognised wireless status output: {0}")]
    Parse(String),
}

/// Errors from starting the tunnel service.
#[derive(Debug, Error)]
pub enum VpnError {
    /// The service manager could not be invoked.
    #[error("failed to invoke service manager: {0}")]
    Invocation(String),

    /// The service manager refused to start the unit.
    #[error("starting unit {unit} failed (exit {code}): {stderr}")]
    Unit {
        unit: String,
        code: i32,
        stderr: String,
    },
}

/// Read-only view of the current wireless association.
#[async_trait]
pub trait WirelessStatus: Send + Sync {
    async fn current_network(&self) -> Result<WifiState, WirelessError>;
}

/// Control over the VPN tunnel service unit.
#[async_trait]
pub trait VpnControl: Send + Sync {
    async fn start_tunnel(&self) -> Result<(), VpnError>;
}
