//! Benchmark setup error type.

use smallworld_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building or measuring a graph failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
