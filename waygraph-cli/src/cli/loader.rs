//! Edge-list parsing for the CLI.
//!
//! The format is line oriented. Blank lines and anything after `#` are
//! ignored. The first significant line is the header
//! `<vertex_count> [directed|undirected]`; every later line is an edge
//! `<source> <target> <weight>`.
//!
//! Headers declaring more than [`MAX_VERTEX_COUNT`] vertices are rejected
//! before any adjacency storage is allocated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{Span, debug, field, instrument};
use waygraph_core::{Graph, Orientation, Weight};

use super::commands::CliError;

/// Largest vertex count an edge-list header may declare.
pub const MAX_VERTEX_COUNT: usize = 1 << 24;

/// Opens `path` and parses it as an edge list.
#[instrument(
    name = "cli.load_graph",
    err,
    fields(path = %path.display(), vertex_count = field::Empty, edges = field::Empty),
)]
pub(super) fn load_graph(path: &Path) -> Result<Graph, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(BufReader::new(file)).map_err(|err| match err {
        ParseFailure::Read(source) => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid { line, reason } => CliError::Parse { line, reason },
    })?;

    let span = Span::current();
    span.record("vertex_count", graph.vertex_count());
    span.record("edges", graph.edge_count());
    Ok(graph)
}

/// Failure raised by [`parse_edge_list`] before a path is attached.
#[derive(Debug)]
pub(super) enum ParseFailure {
    Read(std::io::Error),
    Invalid { line: usize, reason: String },
}

fn invalid(line: usize, reason: impl Into<String>) -> ParseFailure {
    ParseFailure::Invalid {
        line,
        reason: reason.into(),
    }
}

/// Parses an edge list from `reader`. Line numbers in errors are 1-based.
pub(super) fn parse_edge_list(reader: impl BufRead) -> Result<Graph, ParseFailure> {
    let mut graph: Option<Graph> = None;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let raw = line.map_err(ParseFailure::Read)?;
        let content = raw.split_once('#').map_or(raw.as_str(), |(before, _)| before);
        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match graph.as_mut() {
            None => graph = Some(parse_header(&tokens, line_number)?),
            Some(graph) => {
                let (source, target, weight) = parse_edge(&tokens, line_number)?;
                graph
                    .add_edge(source, target, weight)
                    .map_err(|err| invalid(line_number, err.to_string()))?;
            }
        }
    }

    let graph = graph.ok_or_else(|| {
        invalid(
            last_line + 1,
            "missing `<vertex_count> [directed|undirected]` header",
        )
    })?;
    debug!(
        vertex_count = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "edge list parsed"
    );
    Ok(graph)
}

fn parse_header(tokens: &[&str], line: usize) -> Result<Graph, ParseFailure> {
    let (count, orientation) = match tokens {
        [count] => (count, Orientation::Undirected),
        [count, "directed"] => (count, Orientation::Directed),
        [count, "undirected"] => (count, Orientation::Undirected),
        [_, other] => {
            return Err(invalid(
                line,
                format!("unknown orientation `{other}`; expected `directed` or `undirected`"),
            ));
        }
        _ => {
            return Err(invalid(
                line,
                "header must be `<vertex_count> [directed|undirected]`",
            ));
        }
    };
    let vertex_count = count
        .parse::<usize>()
        .map_err(|err| invalid(line, format!("invalid vertex count `{count}`: {err}")))?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(invalid(
            line,
            format!("vertex count {vertex_count} exceeds the limit of {MAX_VERTEX_COUNT}"),
        ));
    }
    Ok(Graph::new(vertex_count, orientation))
}

fn parse_edge(tokens: &[&str], line: usize) -> Result<(usize, usize, Weight), ParseFailure> {
    let [source, target, weight] = tokens else {
        return Err(invalid(
            line,
            format!("expected `<source> <target> <weight>`, found {} fields", tokens.len()),
        ));
    };
    let vertex = |raw: &str| {
        raw.parse::<usize>()
            .map_err(|err| invalid(line, format!("invalid vertex `{raw}`: {err}")))
    };
    let weight = weight
        .parse::<Weight>()
        .map_err(|err| invalid(line, format!("invalid weight `{weight}`: {err}")))?;
    if weight < 0 {
        return Err(invalid(line, format!("weight {weight} is negative")));
    }
    Ok((vertex(*source)?, vertex(*target)?, weight))
}
