//! Command implementations and argument parsing for the waygraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use waygraph_core::{GraphError, ShortestPath, SpanningTree};

use super::loader::load_graph;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "waygraph",
    about = "Shortest paths and minimum spanning trees over weighted edge lists."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Find the cheapest path between two vertices.
    Path(PathCommand),
    /// Build a minimum spanning tree (or forest).
    Mst(MstCommand),
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Edge-list file describing the graph.
    pub input: PathBuf,

    /// Start vertex.
    #[arg(long)]
    pub from: usize,

    /// End vertex.
    #[arg(long)]
    pub to: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Edge-list file describing the graph.
    pub input: PathBuf,

    /// Spanning-tree algorithm to run.
    #[arg(long, value_enum, default_value_t = Algorithm::Prim)]
    pub algorithm: Algorithm,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Spanning-tree algorithms exposed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Grow a tree outward from vertex 0.
    Prim,
    /// Merge components in global weight order.
    Kruskal,
}

impl Algorithm {
    const fn label(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented text for people.
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge-list file was malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A query referenced a vertex outside the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result of a command, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Outcome {
    /// Result of the `path` command.
    Path {
        /// Start vertex.
        from: usize,
        /// End vertex.
        to: usize,
        /// Whether `to` can be reached from `from`.
        reachable: bool,
        /// Distance and vertex sequence.
        #[serde(flatten)]
        route: ShortestPath,
    },
    /// Result of the `mst` command.
    Mst {
        /// Algorithm that produced the tree.
        algorithm: Algorithm,
        /// Whether the tree covers every vertex.
        spanning: bool,
        /// Accepted edges and their total weight.
        #[serde(flatten)]
        tree: SpanningTree,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Format requested on the command line.
    pub format: OutputFormat,
    /// Command result.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or a query vertex is
/// out of range.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use waygraph_cli::cli::{Cli, Command, Outcome, OutputFormat, PathCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 2\n1 2 3\n")?;
/// let cli = Cli {
///     command: Command::Path(PathCommand {
///         input: file.path().to_path_buf(),
///         from: 0,
///         to: 2,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Outcome::Path { route, .. } = summary.outcome else {
///     unreachable!("path command yields a path outcome");
/// };
/// assert_eq!(route.distance(), 5);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Path(command) => {
            span.record("command", "path");
            run_path(command)
        }
        Command::Mst(command) => {
            span.record("command", "mst");
            run_mst(command)
        }
    }
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(from = command.from, to = command.to),
)]
pub(super) fn run_path(command: PathCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.input)?;
    let route = graph.shortest_path(command.from, command.to)?;
    info!(
        reachable = route.is_reachable(),
        distance = route.distance(),
        "path command completed"
    );
    Ok(ExecutionSummary {
        format: command.format,
        outcome: Outcome::Path {
            from: command.from,
            to: command.to,
            reachable: route.is_reachable(),
            route,
        },
    })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(algorithm = command.algorithm.label()),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let graph = load_graph(&command.input)?;
    let tree = match command.algorithm {
        Algorithm::Prim => graph.minimum_spanning_tree_prim(),
        Algorithm::Kruskal => graph.minimum_spanning_tree_kruskal(),
    };
    info!(
        edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        spanning = tree.is_spanning(),
        "mst command completed"
    );
    Ok(ExecutionSummary {
        format: command.format,
        outcome: Outcome::Mst {
            algorithm: command.algorithm,
            spanning: tree.is_spanning(),
            tree,
        },
    })
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON serialisation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use waygraph_cli::cli::{ExecutionSummary, Outcome, OutputFormat, render_summary};
/// # use waygraph_core::GraphBuilder;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = GraphBuilder::new(2).with_edge(0, 1, 3).build()?;
/// let summary = ExecutionSummary {
///     format: OutputFormat::Text,
///     outcome: Outcome::Path {
///         from: 0,
///         to: 1,
///         reachable: true,
///         route: graph.shortest_path(0, 1)?,
///     },
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "distance: 3\npath: 0 -> 1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &summary.outcome)?;
            writeln!(writer)
        }
        OutputFormat::Text => render_text(&summary.outcome, writer),
    }
}

fn render_text(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Path { route, .. } if !route.is_reachable() => writeln!(writer, "unreachable"),
        Outcome::Path { route, .. } => {
            let hops: Vec<String> = route.path().iter().map(ToString::to_string).collect();
            writeln!(writer, "distance: {}", route.distance())?;
            writeln!(writer, "path: {}", hops.join(" -> "))
        }
        Outcome::Mst {
            algorithm, tree, ..
        } => {
            writeln!(writer, "algorithm: {}", algorithm.label())?;
            writeln!(writer, "total weight: {}", tree.total_weight())?;
            writeln!(writer, "spanning: {}", tree.is_spanning())?;
            for edge in tree.edges() {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
            Ok(())
        }
    }
}
