//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so in TUI mode logs only go to an optional file.
//! Line modes log to stderr. `RUST_LOG` overrides the default filter.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "wordle_reveal=info";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Only to `file`, if given
    Tui { file: Option<&'a Path> },
    /// To stderr, and also to `file` if given
    Console { file: Option<&'a Path> },
}

/// Install the global subscriber
///
/// The returned guard must be kept alive until exit so buffered file logs flush.
#[must_use]
pub fn init(target: LogTarget<'_>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (file, console) = match target {
        LogTarget::Tui { file } => (file, false),
        LogTarget::Console { file } => (file, true),
    };

    let (file_layer, guard) = match file.and_then(file_writer) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    let console_layer =
        console.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // A second init (e.g. from tests) is harmless; keep the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}

fn file_writer(
    path: &Path,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let name = path.file_name()?;

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: Could not create log directory {}: {e}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, name);
    Some(tracing_appender::non_blocking(appender))
}
