//! Elevated-privilege precondition.
//!
//! Both pipelines drive root-only tools (device nodes, the tunnel unit),
//! so the check runs before any stage and failure is fatal with no alert.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("must run as root (effective uid {euid})")]
pub struct PrivilegeError {
    pub euid: u32,
}

/// Verify the process runs with effective UID 0.
#[cfg(unix)]
pub fn require_root() -> Result<(), PrivilegeError> {
    let euid = nix::unistd::Uid::effective();
    if euid.is_root() {
        Ok(())
    } else {
        Err(PrivilegeError {
            euid: euid.as_raw(),
        })
    }
}

#[cfg(not(unix))]
pub fn require_root() -> Result<(), PrivilegeError> {
    Ok(())
}
