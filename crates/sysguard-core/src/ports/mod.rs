//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the pipeline services expect from the
//! outside world. They contain no implementation details: no child-process
//! types, no socket types, no keyring paths in any signature.
//!
//! # Design Rules
//!
//! - Intent-based methods (`health`, `encrypt`, `send`), never
//!   implementation-leaking ones (`run_smartctl`, `spawn_gpg`)
//! - One thiserror enum per port so the pipeline can tell an encryption
//!   failure from a delivery failure
//! - Fragile text conventions (the PASSED token, the ESSID field) live
//!   behind the adapter, not in the service

pub mod cipher;
pub mod disk;
pub mod mail;
pub mod wireless;

pub use cipher::{CipherError, ReportCipher};
pub use disk::{DiskProbe, HealthStatus, ProbeError};
pub use mail::{Alert, AlertMailer, MailError};
pub use wireless::{VpnControl, VpnError, WifiState, WirelessError, WirelessStatus};
