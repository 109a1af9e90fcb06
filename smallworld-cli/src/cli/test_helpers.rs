//! Small helpers shared across CLI tests.

use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, GraphArgs, SweepArgs, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn graph_args(node_count: usize, ring_degree: usize, probability: f64) -> GraphArgs {
    GraphArgs {
        node_count,
        ring_degree,
        probability,
        seed: Some(7),
    }
}

pub(super) fn sweep_args(reps: u32, steps: u32, output: Option<PathBuf>) -> SweepArgs {
    SweepArgs {
        node_count: 20,
        ring_degree: 4,
        reps,
        steps,
        seed: Some(11),
        output,
    }
}

pub(super) fn run_command(command: Command) -> ExecutionSummary {
    match run_cli(Cli { command }) {
        Ok(summary) => summary,
        Err(err) => panic!("command must succeed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(command: Command, panic_msg: &str) -> CliError {
    match run_cli(Cli { command }) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
