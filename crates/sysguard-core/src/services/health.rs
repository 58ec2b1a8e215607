//! The disk health alert pipeline.
//!
//! Linear, single pass: probe every configured device in order, collect the
//! unhealthy ones, and if there are any, gather verbose diagnostics, render
//! the report, encrypt it and mail it. Every stage returns an explicit
//! `Result`; the first failing stage ends the run (the scheduler's next
//! invocation starts fresh).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ports::{
    Alert, AlertMailer, CipherError, DiskProbe, HealthStatus, MailError, ProbeError, ReportCipher,
};
use crate::services::report;

/// Stage-tagged pipeline failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("probe stage failed: {0}")]
    Probe(#[from] ProbeError),

    #[error("encrypt stage failed: {0}")]
    Encrypt(#[from] CipherError),

    #[error("deliver stage failed: {0}")]
    Deliver(#[from] MailError),
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every device passed; nothing was collected, encrypted or sent.
    AllHealthy { probed: usize },
    /// An encrypted alert was submitted for these devices.
    AlertSent { failed: Vec<String> },
}

/// The probe → classify → aggregate → detail → format → encrypt → deliver
/// pipeline, wired with whatever adapters the composition root provides.
pub struct HealthPipeline {
    probe: Arc<dyn DiskProbe>,
    cipher: Arc<dyn ReportCipher>,
    mailer: Arc<dyn AlertMailer>,
    subject: String,
}

impl HealthPipeline {
    #[must_use]
    pub fn new(
        probe: Arc<dyn DiskProbe>,
        cipher: Arc<dyn ReportCipher>,
        mailer: Arc<dyn AlertMailer>,
        subject: String,
    ) -> Self {
        Self {
            probe,
            cipher,
            mailer,
            subject,
        }
    }

    /// Run one full pass over `devices`.
    ///
    /// Devices are probed strictly sequentially in the given order. An
    /// empty failure set short-circuits the run: no detail collection, no
    /// encryption, no delivery.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure; nothing is retried and no partial
    /// alert is ever sent.
    pub async fn run(&self, devices: &[String]) -> Result<RunOutcome, PipelineError> {
        let mut failed: Vec<String> = Vec::new();
        for device in devices {
            match self.probe.health(device).await? {
                HealthStatus::Passed => {
                    debug!(device, "health check passed");
                }
                HealthStatus::Failed { verdict } => {
                    warn!(device, verdict, "health check failed");
                    failed.push(device.clone());
                }
                HealthStatus::Unreadable => {
                    // Fail closed: unparseable tool output is never treated
                    // as a pass, but it is logged apart from a real verdict.
                    warn!(device, "unreadable health output, treating as failed");
                    failed.push(device.clone());
                }
            }
        }

        if failed.is_empty() {
            info!(probed = devices.len(), "all devices healthy");
            return Ok(RunOutcome::AllHealthy {
                probed: devices.len(),
            });
        }

        let mut details = Vec::with_capacity(failed.len());
        for device in &failed {
            details.push(self.probe.detail(device).await?);
        }

        let body = report::render(&failed, &details);
        let ciphertext = self.cipher.encrypt(&body).await?;

        self.mailer
            .send(&Alert {
                subject: self.subject.clone(),
                body: ciphertext,
            })
            .await?;

        info!(failed = failed.len(), "encrypted alert submitted");
        Ok(RunOutcome::AlertSent { failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::report::BANNER;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct ScriptedProbe {
        verdicts: HashMap<String, HealthStatus>,
        health_calls: Mutex<Vec<String>>,
        detail_calls: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn new(verdicts: Vec<(&str, HealthStatus)>) -> Self {
            Self {
                verdicts: verdicts
                    .into_iter()
                    .map(|(d, s)| (d.to_string(), s))
                    .collect(),
                health_calls: Mutex::new(vec![]),
                detail_calls: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl DiskProbe for ScriptedProbe {
        async fn health(&self, device: &str) -> Result<HealthStatus, ProbeError> {
            self.health_calls.lock().unwrap().push(device.to_string());
            Ok(self
                .verdicts
                .get(device)
                .cloned()
                .unwrap_or(HealthStatus::Unreadable))
        }

        async fn detail(&self, device: &str) -> Result<String, ProbeError> {
            self.detail_calls.lock().unwrap().push(device.to_string());
            Ok(format!("SMART attributes for {device}\n"))
        }
    }

    struct RecordingCipher {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingCipher {
        fn new() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ReportCipher for RecordingCipher {
        async fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
            self.calls.lock().unwrap().push(plaintext.to_string());
            if self.fail {
                return Err(CipherError::RecipientKey {
                    identity: "ops@example.com".to_string(),
                });
            }
            Ok(format!("-----BEGIN PGP MESSAGE-----\n{plaintext}"))
        }
    }

    struct RecordingMailer {
        sent: Mutex<Vec<Alert>>,
    }

    impl RecordingMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl AlertMailer for RecordingMailer {
        async fn send(&self, alert: &Alert) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(alert.clone());
            Ok(())
        }
    }

    fn pipeline(
        probe: Arc<ScriptedProbe>,
        cipher: Arc<RecordingCipher>,
        mailer: Arc<RecordingMailer>,
    ) -> HealthPipeline {
        HealthPipeline::new(probe, cipher, mailer, "Disks have failed".to_string())
    }

    fn devices(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn all_healthy_is_a_no_op() {
        let probe = Arc::new(ScriptedProbe::new(vec![
            ("/dev/a", HealthStatus::Passed),
            ("/dev/b", HealthStatus::Passed),
        ]));
        let cipher = Arc::new(RecordingCipher::new());
        let mailer = Arc::new(RecordingMailer::new());

        let outcome = pipeline(probe.clone(), cipher.clone(), mailer.clone())
            .run(&devices(&["/dev/a", "/dev/b"]))
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::AllHealthy { probed: 2 });
        assert!(probe.detail_calls.lock().unwrap().is_empty());
        assert!(cipher.calls.lock().unwrap().is_empty());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failure_set_keeps_configuration_order() {
        let probe = Arc::new(ScriptedProbe::new(vec![
            (
                "/dev/a",
                HealthStatus::Failed {
                    verdict: "FAILED!".to_string(),
                },
            ),
            ("/dev/b", HealthStatus::Passed),
            ("/dev/c", HealthStatus::Unreadable),
        ]));
        let cipher = Arc::new(RecordingCipher::new());
        let mailer = Arc::new(RecordingMailer::new());

        let outcome = pipeline(probe.clone(), cipher, mailer)
            .run(&devices(&["/dev/a", "/dev/b", "/dev/c"]))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::AlertSent {
                failed: devices(&["/dev/a", "/dev/c"]),
            }
        );
        // Detail collected exactly once per unhealthy device, same order.
        assert_eq!(
            *probe.detail_calls.lock().unwrap(),
            devices(&["/dev/a", "/dev/c"])
        );
    }

    #[tokio::test]
    async fn unreadable_output_fails_closed() {
        let probe = Arc::new(ScriptedProbe::new(vec![(
            "/dev/a",
            HealthStatus::Unreadable,
        )]));
        let cipher = Arc::new(RecordingCipher::new());
        let mailer = Arc::new(RecordingMailer::new());

        let outcome = pipeline(probe, cipher, mailer.clone())
            .run(&devices(&["/dev/a"]))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::AlertSent {
                failed: devices(&["/dev/a"]),
            }
        );
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delivery_skipped_when_encryption_fails() {
        let probe = Arc::new(ScriptedProbe::new(vec![(
            "/dev/a",
            HealthStatus::Failed {
                verdict: "FAILED!".to_string(),
            },
        )]));
        let cipher = Arc::new(RecordingCipher::failing());
        let mailer = Arc::new(RecordingMailer::new());

        let err = pipeline(probe, cipher, mailer.clone())
            .run(&devices(&["/dev/a"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Encrypt(CipherError::RecipientKey { .. })
        ));
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mixed_run_sends_one_encrypted_alert() {
        let probe = Arc::new(ScriptedProbe::new(vec![
            ("/dev/a", HealthStatus::Passed),
            (
                "/dev/b",
                HealthStatus::Failed {
                    verdict: "FAILED!".to_string(),
                },
            ),
        ]));
        let cipher = Arc::new(RecordingCipher::new());
        let mailer = Arc::new(RecordingMailer::new());

        let outcome = pipeline(probe.clone(), cipher.clone(), mailer.clone())
            .run(&devices(&["/dev/a", "/dev/b"]))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RunOutcome::AlertSent {
                failed: devices(&["/dev/b"]),
            }
        );

        // The plaintext handed to the cipher carries one notice line and
        // one detail block for /dev/b.
        let plaintexts = cipher.calls.lock().unwrap();
        assert_eq!(plaintexts.len(), 1);
        let body = &plaintexts[0];
        assert!(body.contains("The following disks have failed: /dev/b\n"));
        assert!(body.contains("SMART attributes for /dev/b\n"));
        assert_eq!(body.lines().filter(|l| *l == BANNER).count(), 2);

        // Exactly one delivery, with the encrypted body, not the plaintext.
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Disks have failed");
        assert!(sent[0].body.starts_with("-----BEGIN PGP MESSAGE-----"));
        assert!(!sent[0].body.is_empty());
    }

    #[tokio::test]
    async fn probe_error_aborts_without_delivery() {
        struct BrokenProbe;

        #[async_trait]
        impl DiskProbe for BrokenProbe {
            async fn health(&self, device: &str) -> Result<HealthStatus, ProbeError> {
                Err(ProbeError::Invocation {
                    tool: "smartctl".to_string(),
                    device: device.to_string(),
                    message: "No such file or directory".to_string(),
                })
            }

            async fn detail(&self, _device: &str) -> Result<String, ProbeError> {
                unreachable!("detail must not be called when health probing fails");
            }
        }

        let cipher = Arc::new(RecordingCipher::new());
        let mailer = Arc::new(RecordingMailer::new());
        let pipeline = HealthPipeline::new(
            Arc::new(BrokenProbe),
            cipher.clone(),
            mailer.clone(),
            "subject".to_string(),
        );

        let err = pipeline.run(&devices(&["/dev/a"])).await.unwrap_err();
        assert!(matches!(err, PipelineError::Probe(_)));
        assert!(cipher.calls.lock().unwrap().is_empty());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
