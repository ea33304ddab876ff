//! Command-line interface orchestration for waygraph.
//!
//! Each command loads an edge-list file, runs one graph query, and hands the
//! result back for rendering as text or JSON.

mod commands;
mod loader;

pub use commands::{
    Algorithm, Cli, CliError, Command, ExecutionSummary, MstCommand, Outcome, OutputFormat,
    PathCommand, render_summary, run_cli,
};
pub use loader::MAX_VERTEX_COUNT;
