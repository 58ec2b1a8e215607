//! SMTP adapter: the [`AlertMailer`] implementation.
//!
//! Submission with STARTTLS upgrade before authentication, one best-effort
//! send per run. lettre owns the greeting/upgrade/re-greet dialog; this
//! adapter only builds the transport and the message.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use sysguard_core::ports::{Alert, AlertMailer, MailError};
use sysguard_core::settings::SmtpSettings;

/// [`AlertMailer`] backed by an authenticated STARTTLS SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpMailer {
    /// Build the transport from settings. Fails only on malformed
    /// addresses or an unusable relay host; nothing connects until
    /// [`AlertMailer::send`].
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let sender: Mailbox = settings
            .sender
            .parse()
            .map_err(|e| MailError::Envelope(format!("sender address: {e}")))?;
        let recipient: Mailbox = settings
            .recipient
            .parse()
            .map_err(|e| MailError::Envelope(format!("recipient address: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.sender.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(settings.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            sender,
            recipient,
        })
    }
}

#[async_trait]
impl AlertMailer for SmtpMailer {
    async fn send(&self, alert: &Alert) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(alert.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(alert.body.clone())
            .map_err(|e| MailError::Envelope(e.to_string()))?;

        debug!(to = %self.recipient, "submitting alert");
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}
