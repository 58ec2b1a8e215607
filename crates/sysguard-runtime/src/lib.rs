//! Adapters implementing the sysguard-core ports against the real system:
//! smartctl, gpg, the SMTP submission endpoint, iwconfig and systemctl.
//!
//! Every child process is spawned with `kill_on_drop` and bounded by the
//! configured command timeout, so a wedged external tool cannot hang a
//! scheduled run forever.

pub mod gpg;
pub mod mail;
pub mod privilege;
pub mod smartctl;
pub mod wireless;

pub use gpg::GpgCipher;
pub use mail::SmtpMailer;
pub use privilege::{PrivilegeError, require_root};
pub use smartctl::SmartctlProbe;
pub use wireless::{IwconfigStatus, SystemctlVpn};
