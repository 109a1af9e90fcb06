//! Command-line interface for the small-world experiments.
//!
//! `build` and `distances` inspect a single graph; `sweep` repeats the build
//! over a range of rewiring probabilities and tabulates degree distributions.

mod commands;
mod sweep;

pub use commands::{
    BuildSummary, Cli, CliError, Command, DistanceSummary, ExecutionSummary, GraphArgs,
    SweepArgs, SweepSummary, render_summary, run_cli,
};
pub use sweep::{SweepPoint, SweepReport, degree_histogram, derive_seed};

#[cfg(test)]
mod test_helpers;
