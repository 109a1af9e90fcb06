//! Command implementations and argument parsing for the smallworld CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use smallworld_core::{
    Graph, GraphError, GraphErrorCode, NodeId, all_pairs_distances, build_small_world,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::sweep::{SweepReport, run_sweep};

const DEFAULT_SWEEP_STEPS: u32 = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "smallworld", about = "Build and measure small-world graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build one graph and print its edges and degree summary.
    Build(GraphArgs),
    /// Build one graph and print its path-length statistics.
    Distances(GraphArgs),
    /// Tabulate degree distributions across a range of probabilities.
    Sweep(SweepArgs),
}

/// Parameters describing a single graph build.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of nodes.
    pub node_count: usize,

    /// Ring-lattice degree; odd values are rounded down.
    pub ring_degree: usize,

    /// Rewiring probability in `[0, 1]`.
    pub probability: f64,

    /// Seed for the random source; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `sweep` command.
#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// Number of nodes per graph.
    pub node_count: usize,

    /// Ring-lattice degree; odd values are rounded down.
    pub ring_degree: usize,

    /// Independent graphs built per probability.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub reps: u32,

    /// Number of probabilities, evenly spaced up to and including 1.
    #[arg(
        long,
        default_value_t = DEFAULT_SWEEP_STEPS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub steps: u32,

    /// Base seed from which every replicate seed is derived.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Writing the report file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Serialising the sweep report failed.
    #[error("failed to serialise sweep report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Graph construction or measurement failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Returns the stable core error code when the failure came from the graph
    /// engine.
    #[must_use]
    pub fn code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Core(err) => Some(err.code()),
            Self::Io { .. } | Self::Serialize(_) => None,
        }
    }
}

/// Edge list and degree statistics of one built graph.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    /// Seed used for the build.
    pub seed: u64,
    /// Number of nodes.
    pub node_count: usize,
    /// Edges as `(min, max)` pairs in store order.
    pub edges: Vec<(NodeId, NodeId)>,
    /// Degree of every node, indexed by node id.
    pub degrees: Vec<usize>,
    /// Edges redirected during rewiring.
    pub rewired_edges: usize,
}

/// Path-length statistics of one built graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSummary {
    /// Seed used for the build.
    pub seed: u64,
    /// Number of nodes.
    pub node_count: usize,
    /// Mutually reachable unordered pairs.
    pub reachable_pairs: usize,
    /// Mean hop count over reachable pairs.
    pub mean_distance: Option<f64>,
    /// Largest hop count over reachable pairs.
    pub diameter: Option<usize>,
}

/// Outcome of one sweep, with the file it was written to if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    /// Tabulated histograms.
    pub report: SweepReport,
    /// Destination file when `--output` was given.
    pub output: Option<PathBuf>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionSummary {
    /// Result of `build`.
    Build(BuildSummary),
    /// Result of `distances`.
    Distances(DistanceSummary),
    /// Result of `sweep`.
    Sweep(SweepSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built or the sweep report
/// cannot be written.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::{Cli, Command, ExecutionSummary, GraphArgs, run_cli};
///
/// let cli = Cli {
///     command: Command::Build(GraphArgs {
///         node_count: 10,
///         ring_degree: 4,
///         probability: 0.0,
///         seed: Some(1),
///     }),
/// };
/// let ExecutionSummary::Build(summary) = run_cli(cli)? else {
///     unreachable!("build returns a build summary");
/// };
/// assert_eq!(summary.edges.len(), 20);
/// # Ok::<(), smallworld_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Build(args) => {
            span.record("command", "build");
            run_build(&args).map(ExecutionSummary::Build)
        }
        Command::Distances(args) => {
            span.record("command", "distances");
            run_distances(&args).map(ExecutionSummary::Distances)
        }
        Command::Sweep(args) => {
            span.record("command", "sweep");
            run_sweep_command(args).map(ExecutionSummary::Sweep)
        }
    }
}

pub(super) fn build_graph(args: &GraphArgs) -> Result<(Graph, u64, usize), CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = Graph::new(args.node_count, args.ring_degree);
    let summary = build_small_world(&mut graph, args.probability, &mut rng)?;
    Ok((graph, seed, summary.rewired_edges()))
}

#[instrument(
    name = "cli.build",
    err,
    skip(args),
    fields(nodes = args.node_count, seed = field::Empty),
)]
pub(super) fn run_build(args: &GraphArgs) -> Result<BuildSummary, CliError> {
    let (graph, seed, rewired_edges) = build_graph(args)?;
    Span::current().record("seed", seed);
    let degrees = graph
        .nodes()
        .map(|node| graph.degree(node))
        .collect::<Result<Vec<_>, _>>()?;
    let edges = graph.edges().iter().map(|edge| edge.canonical()).collect();
    Ok(BuildSummary {
        seed,
        node_count: graph.node_count(),
        edges,
        degrees,
        rewired_edges,
    })
}

#[instrument(
    name = "cli.distances",
    err,
    skip(args),
    fields(nodes = args.node_count, seed = field::Empty),
)]
pub(super) fn run_distances(args: &GraphArgs) -> Result<DistanceSummary, CliError> {
    let (graph, seed, _) = build_graph(args)?;
    Span::current().record("seed", seed);
    let distances = all_pairs_distances(&graph)?;
    info!(
        pairs = distances.len(),
        diameter = distances.diameter(),
        "distances measured"
    );
    Ok(DistanceSummary {
        seed,
        node_count: graph.node_count(),
        reachable_pairs: distances.len(),
        mean_distance: distances.mean_distance(),
        diameter: distances.diameter(),
    })
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(args),
    fields(nodes = args.node_count, reps = args.reps, steps = args.steps),
)]
pub(super) fn run_sweep_command(args: SweepArgs) -> Result<SweepSummary, CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let report = run_sweep(args.node_count, args.ring_degree, args.reps, args.steps, seed)?;
    if let Some(path) = &args.output {
        write_report(&report, path)?;
        info!(path = %path.display(), "sweep report written");
    }
    Ok(SweepSummary {
        report,
        output: args.output,
    })
}

fn write_report(report: &SweepReport, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(io_error)
}

/// Renders `summary` to `writer`.
///
/// `build` and `distances` produce line-oriented text; a sweep without an
/// output file is printed as pretty JSON.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use smallworld_cli::cli::{DistanceSummary, ExecutionSummary, render_summary};
///
/// let summary = ExecutionSummary::Distances(DistanceSummary {
///     seed: 7,
///     node_count: 4,
///     reachable_pairs: 6,
///     mean_distance: Some(1.5),
///     diameter: Some(2),
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8_lossy(&buffer).contains("diameter: 2"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Build(build) => render_build(build, &mut writer),
        ExecutionSummary::Distances(distances) => {
            writeln!(writer, "seed: {}", distances.seed)?;
            writeln!(writer, "nodes: {}", distances.node_count)?;
            writeln!(writer, "reachable pairs: {}", distances.reachable_pairs)?;
            match distances.mean_distance {
                Some(mean) => writeln!(writer, "mean distance: {mean:.4}")?,
                None => writeln!(writer, "mean distance: n/a")?,
            }
            match distances.diameter {
                Some(diameter) => writeln!(writer, "diameter: {diameter}"),
                None => writeln!(writer, "diameter: n/a"),
            }
        }
        ExecutionSummary::Sweep(sweep) => match &sweep.output {
            Some(path) => writeln!(writer, "sweep written to {}", path.display()),
            None => {
                serde_json::to_writer_pretty(&mut writer, &sweep.report)?;
                writeln!(writer)
            }
        },
    }
}

fn render_build(summary: &BuildSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edges.len())?;
    writeln!(writer, "rewired: {}", summary.rewired_edges)?;
    if let (Some(min), Some(max)) = (summary.degrees.iter().min(), summary.degrees.iter().max()) {
        writeln!(writer, "degree: min {min} max {max}")?;
    }
    for (source, target) in &summary.edges {
        writeln!(writer, "{source}\t{target}")?;
    }
    Ok(())
}
