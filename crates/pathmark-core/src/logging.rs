//! Structured logging setup
//!
//! All diagnostics go to stderr so stdout stays free for DOT output and
//! reports. Filtering honours `RUST_LOG`, then `PATHMARK_LOG`, then the CLI
//! flags.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV_VAR: &str = "PATHMARK_LOG";
const TARGETS: [&str; 2] = ["pathmark", "pathmark_core"];

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", vertices = graph.vertex_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Logging flags as given on the command line
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub level: Option<String>,
    pub json: bool,
}

impl LogOptions {
    /// Filter directive derived from the flags alone.
    ///
    /// A bare level (`info`) is scoped to pathmark's own crates; anything with
    /// a `=` is passed through as a full directive.
    pub fn directive(&self) -> String {
        match (&self.level, self.verbose) {
            (Some(level), _) if level.contains('=') => level.clone(),
            (Some(level), _) => scoped(level),
            (None, true) => scoped("debug"),
            (None, false) => scoped("warn"),
        }
    }
}

fn scoped(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the global subscriber
pub fn init_tracing(opts: &LogOptions) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(opts.directive()));

    let registry = tracing_subscriber::registry().with(filter);

    if opts.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
