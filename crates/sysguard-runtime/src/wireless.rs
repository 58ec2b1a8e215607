//! iwconfig and systemctl adapters for the wireless trigger.

use std::process::Stdio;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use sysguard_core::ports::{VpnControl, VpnError, WifiState, WirelessError, WirelessStatus};

fn essid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"ESSID:"([^"]*)""#).expect("ESSID pattern is valid"))
}

/// Parse iwconfig output into a wireless association state.
///
/// `ESSID:off/any` means no association; otherwise the quoted string after
/// `ESSID:` names the current network. Output with no ESSID field at all
/// (no wireless interface, unexpected tool) is a parse error.
pub fn parse_wireless_output(output: &str) -> Result<WifiState, WirelessError> {
    if output.contains("ESSID:off/any") {
        return Ok(WifiState::Disconnected);
    }
    if let Some(caps) = essid_pattern().captures(output) {
        return Ok(WifiState::Connected(caps[1].to_string()));
    }
    Err(WirelessError::Parse(
        "no ESSID field in tool output".to_string(),
    ))
}

/// [`WirelessStatus`] backed by the iwconfig binary.
pub struct IwconfigStatus {
    binary: String,
    command_timeout: Duration,
}

impl IwconfigStatus {
    #[must_use]
    pub fn new(binary: impl Into<String>, command_timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            command_timeout,
        }
    }
}

#[async_trait]
impl WirelessStatus for IwconfigStatus {
    async fn current_network(&self) -> Result<WifiState, WirelessError> {
        let output = timeout(
            self.command_timeout,
            Command::new(&self.binary)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| {
            WirelessError::Invocation(format!(
                "{} timed out after {}s",
                self.binary,
                self.command_timeout.as_secs()
            ))
        })?
        .map_err(|e| WirelessError::Invocation(e.to_string()))?;

        // iwconfig prints wired interfaces to stderr and wireless ones to
        // stdout; only stdout carries the ESSID field.
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_wireless_output(&stdout)
    }
}

/// [`VpnControl`] backed by `systemctl start <unit>`.
pub struct SystemctlVpn {
    unit: String,
    command_timeout: Duration,
}

impl SystemctlVpn {
    #[must_use]
    pub fn new(unit: impl Into<String>, command_timeout: Duration) -> Self {
        Self {
            unit: unit.into(),
            command_timeout,
        }
    }
}

#[async_trait]
impl VpnControl for SystemctlVpn {
    async fn start_tunnel(&self) -> Result<(), VpnError> {
        debug!(unit = %self.unit, "starting tunnel unit");
        let output = timeout(
            self.command_timeout,
            Command::new("systemctl")
                .arg("start")
                .arg(&self.unit)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| {
            VpnError::Invocation(format!(
                "systemctl timed out after {}s",
                self.command_timeout.as_secs()
            ))
        })?
        .map_err(|e| VpnError::Invocation(e.to_string()))?;

        if !output.status.success() {
            return Err(VpnError::Unit {
                unit: self.unit.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSOCIATED: &str = r#"wlp3s0    IEEE 802.11  ESSID:"home"
          Mode:Managed  Frequency:5.18 GHz  Access Point: AA:BB:CC:DD:EE:FF
          Bit Rate=866.7 Mb/s   Tx-Power=22 dBm
"#;

    const UNASSOCIATED: &str = r#"wlp3s0    IEEE 802.11  ESSID:off/any
          Mode:Managed  Access Point: Not-Associated   Tx-Power=22 dBm
"#;

    #[test]
    fn quoted_essid_parses_as_connected() {
        assert_eq!(
            parse_wireless_output(ASSOCIATED).unwrap(),
            WifiState::Connected("home".to_string())
        );
    }

    #[test]
    fn off_any_parses_as_disconnected() {
        assert_eq!(
            parse_wireless_output(UNASSOCIATED).unwrap(),
            WifiState::Disconnected
        );
    }

    #[test]
    fn essid_with_spaces_is_kept_verbatim() {
        let out = r#"wlan0  IEEE 802.11  ESSID:"Cafe Guest 5G""#;
        assert_eq!(
            parse_wireless_output(out).unwrap(),
            WifiState::Connected("Cafe Guest 5G".to_string())
        );
    }

    #[test]
    fn output_without_essid_is_a_parse_error() {
        let out = "lo        no wireless extensions.\n";
        assert!(matches!(
            parse_wireless_output(out),
            Err(WirelessError::Parse(_))
        ));
    }
}
