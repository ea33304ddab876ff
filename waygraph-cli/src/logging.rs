//! Diagnostics for the `waygraph` binary.
//!
//! Query results own stdout, so spans and events are written to stderr. Two
//! environment variables shape the output:
//!
//! | Variable | Accepted values | Default |
//! | --- | --- | --- |
//! | `WAYGRAPH_LOG_FORMAT` | `human` (alias `text`), `json` | `human` |
//! | `RUST_LOG` | `tracing_subscriber::EnvFilter` directives | `info` |
//!
//! Spans are reported when they close, so each `graph.*` and `cli.*` span
//! appears once with its recorded fields and timing.

use std::{env, io, sync::OnceLock};

use thiserror::Error;
use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::format::FmtSpan, layer::SubscriberExt,
};

const LOG_FORMAT_ENV: &str = "WAYGRAPH_LOG_FORMAT";
const FILTER_ENV: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Errors raised while reading the logging environment.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `WAYGRAPH_LOG_FORMAT` named a layout the binary does not provide.
    #[error("unsupported log format `{provided}`; expected `human`, `text` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// `RUST_LOG` could not be parsed as filter directives.
    #[error("invalid `RUST_LOG` directives `{directives}`: {source}")]
    InvalidFilter {
        /// Raw directives supplied by the user.
        directives: String,
        /// Parse failure reported by `tracing_subscriber`.
        #[source]
        source: ParseError,
    },
}

/// Layout of diagnostic lines on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

/// Whether [`init_logging`] installed the global subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoggingStatus {
    /// This call installed the waygraph subscriber.
    Installed,
    /// A subscriber was already in place and has been left untouched.
    AlreadyInstalled,
}

/// Logging options resolved from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    format: LogFormat,
    filter: String,
}

impl LogSettings {
    /// Reads `WAYGRAPH_LOG_FORMAT` and `RUST_LOG` from the process environment.
    ///
    /// # Errors
    /// See [`LogSettings::from_lookup`].
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Resolves settings through `lookup`, which stands in for `env::var`.
    ///
    /// Unset or blank variables fall back to the defaults.
    ///
    /// # Errors
    /// Returns [`LoggingError::InvalidUnicode`] for non UTF-8 values,
    /// [`LoggingError::UnsupportedFormat`] for an unknown format and
    /// [`LoggingError::InvalidFilter`] when `RUST_LOG` does not parse.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, env::VarError>,
    ) -> Result<Self, LoggingError> {
        let format = read(&lookup, LOG_FORMAT_ENV)?
            .map(|raw| parse_log_format(&raw))
            .transpose()?
            .unwrap_or_default();
        let filter = read(&lookup, FILTER_ENV)?.unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        EnvFilter::try_new(&filter).map_err(|source| LoggingError::InvalidFilter {
            directives: filter.clone(),
            source,
        })?;
        Ok(Self { format, filter })
    }

    /// Returns the selected output layout.
    #[must_use]
    #[rustfmt::skip]
    pub fn format(&self) -> LogFormat { self.format }

    /// Returns the filter directives in effect.
    #[must_use]
    #[rustfmt::skip]
    pub fn filter(&self) -> &str { &self.filter }
}

fn read(
    lookup: &impl Fn(&'static str) -> Result<String, env::VarError>,
    name: &'static str,
) -> Result<Option<String>, LoggingError> {
    match lookup(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" | "text" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

/// Installs the waygraph subscriber as the process-wide default.
///
/// Later calls, and calls made after some other subscriber claimed the
/// global slot, return [`LoggingStatus::AlreadyInstalled`].
///
/// # Errors
/// Returns [`LoggingError`] when the environment is malformed; see
/// [`LogSettings::from_lookup`].
pub fn init_logging() -> Result<LoggingStatus, LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(LoggingStatus::AlreadyInstalled);
    }
    let status = install(&LogSettings::from_env()?)?;
    INSTALLED.get_or_init(|| ());
    Ok(status)
}

fn install(settings: &LogSettings) -> Result<LoggingStatus, LoggingError> {
    let filter =
        EnvFilter::try_new(settings.filter()).map_err(|source| LoggingError::InvalidFilter {
            directives: settings.filter().to_owned(),
            source,
        })?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(io::stderr);
    let fmt_layer = match settings.format() {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };
    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return Ok(LoggingStatus::AlreadyInstalled);
    }
    if let Err(err) = LogTracer::init() {
        debug!(error = %err, "`log` records are not bridged; the facade already has a logger");
    }
    debug!(format = ?settings.format(), filter = settings.filter(), "logging installed");
    Ok(LoggingStatus::Installed)
}
