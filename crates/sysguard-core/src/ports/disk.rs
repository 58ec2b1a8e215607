//! Disk probe trait definition.
//!
//! This port wraps the external SMART diagnostic tool. The adapter owns the
//! textual convention (last whitespace-delimited token of the health output,
//! `PASSED` meaning healthy); the pipeline only ever sees a [`HealthStatus`].

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a single device health probe.
///
/// Anything other than `Passed` is treated as unhealthy by the pipeline
/// (fail closed), but `Unreadable` is kept distinct so a parse anomaly in
/// the tool output is tellable from a genuine hardware verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The tool reported the literal `PASSED` verdict.
    Passed,
    /// The tool reported some other verdict token (e.g. `FAILED!`).
    Failed {
        /// The final token of the tool output, verbatim.
        verdict: String,
    },
    /// The tool produced empty or unparseable output.
    Unreadable,
}

impl HealthStatus {
    /// Whether this status counts as healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Errors from invoking the diagnostic tool itself.
///
/// These are invocation failures (binary missing, not spawnable, hung), not
/// health verdicts. A probe error aborts the whole run: no partial alert is
/// sent for devices not yet probed.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The external tool could not be spawned or its output not collected.
    #[error("failed to run {tool} for {device}: {message}")]
    Invocation {
        tool: String,
        device: String,
        message: String,
    },

    /// The external tool exceeded the configured command timeout.
    #[error("{tool} timed out after {seconds}s probing {device}")]
    Timeout {
        tool: String,
        device: String,
        seconds: u64,
    },
}

/// Access to the SMART diagnostic tool for one block device at a time.
#[async_trait]
pub trait DiskProbe: Send + Sync {
    /// Run the quick health check for `device` and classify its verdict.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] only when the tool itself cannot be invoked;
    /// an unhealthy or unparseable verdict is a successful probe.
    async fn health(&self, device: &str) -> Result<HealthStatus, ProbeError>;

    /// Collect the full verbose diagnostic report for `device`.
    ///
    /// The returned block preserves the tool's line order, each line
    /// newline-terminated, with no filtering or truncation.
    async fn detail(&self, device: &str) -> Result<String, ProbeError>;
}
