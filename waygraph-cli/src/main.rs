//! Entry point for the `waygraph` binary.
//!
//! Parses arguments with clap, runs the requested graph query, writes the
//! result to stdout and maps failures to a non-zero exit status. Logging is
//! set up before anything else so every step can emit diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tracing::{error, field};
use waygraph_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use waygraph_core::GraphErrorCode;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render result")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = graph_error_code(&err).map(|code| field::display(code.as_str()));
        error!(
            error = %err,
            cause = %err.root_cause(),
            code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Finds the core error code behind a failed command, if a graph query
/// raised it.
fn graph_error_code(err: &anyhow::Error) -> Option<GraphErrorCode> {
    err.chain().find_map(|cause| match cause.downcast_ref::<CliError>() {
        Some(CliError::Graph(graph)) => Some(graph.code()),
        _ => None,
    })
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
