//! smartctl adapter: the [`DiskProbe`] implementation.
//!
//! `smartctl -H <device>` for the quick verdict, `smartctl --all <device>`
//! for the full report. The tool's exit code is deliberately ignored for
//! classification (smartctl exits non-zero for a failing disk); only the
//! stdout text matters, and its final-token convention is parsed here and
//! nowhere else.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use sysguard_core::ports::{DiskProbe, HealthStatus, ProbeError};

/// Classify one health-check output by its last whitespace-delimited token.
///
/// Trailing backslash-escaped artifacts are stripped before comparison, and
/// empty or token-less output classifies as [`HealthStatus::Unreadable`]
/// rather than passing.
#[must_use]
pub fn classify(output: &str) -> HealthStatus {
    let Some(token) = output.split_whitespace().last() else {
        return HealthStatus::Unreadable;
    };
    let verdict = token.split('\\').next().unwrap_or_default();
    if verdict.is_empty() {
        HealthStatus::Unreadable
    } else if verdict == "PASSED" {
        HealthStatus::Passed
    } else {
        HealthStatus::Failed {
            verdict: verdict.to_string(),
        }
    }
}

/// [`DiskProbe`] backed by the smartctl binary.
pub struct SmartctlProbe {
    binary: String,
    command_timeout: Duration,
}

impl SmartctlProbe {
    #[must_use]
    pub fn new(binary: impl Into<String>, command_timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            command_timeout,
        }
    }

    fn invocation(&self, device: &str, message: impl ToString) -> ProbeError {
        ProbeError::Invocation {
            tool: self.binary.clone(),
            device: device.to_string(),
            message: message.to_string(),
        }
    }

    fn timed_out(&self, device: &str) -> ProbeError {
        ProbeError::Timeout {
            tool: self.binary.clone(),
            device: device.to_string(),
            seconds: self.command_timeout.as_secs(),
        }
    }
}

#[async_trait]
impl DiskProbe for SmartctlProbe {
    async fn health(&self, device: &str) -> Result<HealthStatus, ProbeError> {
        debug!(device, tool = %self.binary, "running health check");
        let output = timeout(
            self.command_timeout,
            Command::new(&self.binary)
                .arg("-H")
                .arg(device)
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| self.timed_out(device))?
        .map_err(|e| self.invocation(device, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(classify(&stdout))
    }

    async fn detail(&self, device: &str) -> Result<String, ProbeError> {
        debug!(device, tool = %self.binary, "collecting full report");
        let mut child = Command::new(&self.binary)
            .arg("--all")
            .arg(device)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.invocation(device, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.invocation(device, "child stdout unavailable"))?;

        // Stream line-by-line, preserving order, each line right-trimmed
        // and newline-terminated, with no filtering or truncation.
        let collect = async {
            let mut block = String::new();
            let mut lines = BufReader::new(stdout).lines();
            while let Some(line) = lines.next_line().await? {
                block.push_str(line.trim_end());
                block.push('\n');
            }
            child.wait().await?;
            Ok::<String, std::io::Error>(block)
        };

        let collected = timeout(self.command_timeout, collect).await;
        match collected {
            Ok(block) => block.map_err(|e| self.invocation(device, e)),
            Err(_) => Err(self.timed_out(device)),
        }
    }
}
