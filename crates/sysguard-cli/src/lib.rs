//! CLI adapter for sysguard.
//!
//! The binary is the composition root: it parses arguments, loads the
//! configuration, wires the runtime adapters into the core pipelines and
//! maps failures to exit codes. No pipeline logic lives here.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;

pub use error::CliError;
pub use parser::{Cli, Commands};
