//! Logging initialization utilities.
//!
//! `init_subscriber` installs the global tracing subscriber, writing either to stderr
//! (default) or to a rolling daily log file. The default level is `warn` so a plain run
//! of the fixture writes nothing to stderr; verbose mode enables debug level.
//!
//! File mode writes through a non-blocking worker. The returned `WorkerGuard` must be
//! held until the end of `main`: dropping it flushes the lines still queued, which for
//! a process that lives a few milliseconds is most of them.

use crate::constants::{LOG_FILE_NAME, PROJECT_DIRS};
use directories::ProjectDirs;
use std::{fs, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Directory the file appender writes into, if the platform has a cache dir.
pub fn log_dir() -> Option<PathBuf> {
    let (qualifier, organization, application) = PROJECT_DIRS;
    ProjectDirs::from(qualifier, organization, application).map(|proj| {
        let mut dir = PathBuf::from(proj.cache_dir());
        dir.push("logs");
        dir
    })
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Initialize the global tracing subscriber.
///
/// * `log_to_file` - if true, write logs to a rolling daily file under the user's cache dir
/// * `verbose` - if true, set global log level to `debug`, otherwise `warn`
///
/// Returns the file writer's guard in file mode. Calls after a subscriber is already
/// installed are no-ops and return `None`.
#[must_use = "dropping the guard stops the file writer; hold it until exit"]
pub fn init_subscriber(log_to_file: bool, verbose: bool) -> Option<WorkerGuard> {
    if log_to_file && let Some(dir) = log_dir() {
        return init_file_subscriber(dir, verbose);
    }

    let installed = fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("Logging initialized (stderr mode) verbose={}", verbose);
    }
    None
}

fn init_file_subscriber(dir: PathBuf, verbose: bool) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Failed to create log dir {:?}: {e}", dir);
    }
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, LOG_FILE_NAME));

    fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    tracing::debug!(
        "Logging initialized (file mode) verbose={} dir={:?}",
        verbose,
        dir
    );
    Some(guard)
}
