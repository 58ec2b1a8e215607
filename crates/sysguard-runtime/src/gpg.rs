//! gpg adapter: the [`ReportCipher`] implementation.
//!
//! Spawns `gpg --batch --armor --encrypt --recipient <identity>` against a
//! configurable keyring directory, feeds the report through stdin and
//! collects the ASCII-armored ciphertext from stdout.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use sysguard_core::ports::{CipherError, ReportCipher};

/// [`ReportCipher`] backed by the gpg binary and a filesystem keyring.
pub struct GpgCipher {
    binary: String,
    homedir: Option<String>,
    recipient: String,
    command_timeout: Duration,
}

impl GpgCipher {
    #[must_use]
    pub fn new(
        binary: impl Into<String>,
        homedir: Option<String>,
        recipient: impl Into<String>,
        command_timeout: Duration,
    ) -> Self {
        Self {
            binary: binary.into(),
            homedir,
            recipient: recipient.into(),
            command_timeout,
        }
    }
}

#[async_trait]
impl ReportCipher for GpgCipher {
    async fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        debug!(recipient = %self.recipient, "encrypting report");

        let mut cmd = Command::new(&self.binary);
        if let Some(dir) = &self.homedir {
            cmd.arg("--homedir").arg(dir);
        }
        cmd.args(["--batch", "--yes", "--armor", "--encrypt", "--recipient"])
            .arg(&self.recipient)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| CipherError::Invocation(e.to_string()))?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CipherError::Invocation("child stdin unavailable".to_string()))?;

        let feed = async move {
            stdin.write_all(plaintext.as_bytes()).await?;
            drop(stdin); // close the pipe so gpg sees EOF
            child.wait_with_output().await
        };

        let waited = timeout(self.command_timeout, feed).await;
        let output = waited
            .map_err(|_| CipherError::Timeout(self.command_timeout.as_secs()))?
            .map_err(|e| CipherError::Invocation(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains("No public key") || stderr.contains("public key not found") {
                return Err(CipherError::RecipientKey {
                    identity: self.recipient.clone(),
                });
            }
            return Err(CipherError::Encryption {
                code: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        let armored = String::from_utf8_lossy(&output.stdout).into_owned();
        if armored.trim().is_empty() {
            // A zero exit with no ciphertext still must not reach delivery.
            return Err(CipherError::Encryption {
                code: 0,
                stderr: "gpg produced no ciphertext".to_string(),
            });
        }
        Ok(armored)
    }
}
