//! Pipeline services composed from ports.

pub mod health;
pub mod report;
pub mod vpn;

pub use health::{HealthPipeline, PipelineError, RunOutcome};
pub use vpn::{VpnOutcome, VpnTrigger, VpnTriggerError};
