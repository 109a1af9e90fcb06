//! Support library for the smallworld CLI binary.
//!
//! Exposes the command and logging modules so integration tests can drive the
//! experiments without forking a subprocess.

pub mod cli;
pub mod logging;
