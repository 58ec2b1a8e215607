//! Report cipher trait definition.
//!
//! Encrypts the alert body for the single configured recipient. The
//! pipeline never sees the keyring location or the recipient identity;
//! those are adapter construction parameters.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from encrypting the report.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The recipient's public key is not present in the keyring.
    ///
    /// Surfaced distinctly because it is a configuration problem, not a
    /// transient one, and will fail every scheduled run until fixed.
    #[error("recipient key not found in keyring: {identity}")]
    RecipientKey { identity: String },

    /// The encryption tool could not be spawned or fed.
    #[error("failed to run encryption tool: {0}")]
    Invocation(String),

    /// The encryption tool ran but reported failure.
    #[error("encryption failed (exit {code}): {stderr}")]
    Encryption { code: i32, stderr: String },

    /// The encryption tool exceeded the configured command timeout.
    #[error("encryption timed out after {0}s")]
    Timeout(u64),
}

/// Asymmetric encryption of one report for one recipient.
#[async_trait]
pub trait ReportCipher: Send + Sync {
    /// Encrypt `plaintext`, returning opaque ASCII-armored ciphertext.
    ///
    /// # Errors
    ///
    /// Any [`CipherError`] aborts the pipeline before delivery; the
    /// plaintext report is never sent unencrypted as a fallback.
    async fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;
}
