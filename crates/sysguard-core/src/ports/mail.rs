//! Alert mailer trait definition.

use async_trait::async_trait;
use thiserror::Error;

/// A fully-formed alert ready for submission: subject plus an opaque body
/// (already-encrypted ciphertext by the time it reaches the mailer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

/// Errors from submitting the alert mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// Sender/recipient address or message construction problem.
    #[error("invalid message envelope: {0}")]
    Envelope(String),

    /// Connect, STARTTLS upgrade, authentication or send failure.
    #[error("mail submission failed: {0}")]
    Transport(String),
}

/// Single best-effort submission of one alert to the configured recipient.
///
/// No retry, no queuing, no delivery confirmation beyond what the transport
/// reports; the scheduler's next run is the only recovery mechanism.
#[async_trait]
pub trait AlertMailer: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<(), MailError>;
}
