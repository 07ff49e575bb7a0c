//! Logging setup.
//!
//! Human-readable events go to stderr. When a log file is configured, the same
//! events are also written there as JSON lines through a non-blocking writer;
//! keep the returned guard alive until exit so buffered lines are flushed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Explicit log file path.
const LOG_PATH_ENV: &str = "GEMATRIA_STATS_LOG_PATH";

/// Directory that receives [`LOG_FILE_NAME`].
const LOG_DIR_ENV: &str = "GEMATRIA_STATS_LOG_DIR";

const LOG_FILE_NAME: &str = "gematria-stats.jsonl";

/// Where logs are written beyond stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// JSONL log file, if any.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `log_dir`
    /// from the loaded configuration.
    ///
    /// `GEMATRIA_STATS_LOG_PATH` wins over `GEMATRIA_STATS_LOG_DIR`, which wins
    /// over the configured directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| {
            env_dir
                .or(config_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        });
        Self { log_file }
    }
}

/// Pick the filter level from CLI flags, falling back to the configured level.
fn filter_level(quiet: bool, verbose: u8, configured: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the event filter. `RUST_LOG` takes precedence over everything else.
pub fn env_filter(quiet: bool, verbose: u8, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_level(quiet, verbose, configured)))
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(filter_level(true, 2, "info"), "error");
    }

    #[test]
    fn verbose_levels() {
        assert_eq!(filter_level(false, 0, "warn"), "warn");
        assert_eq!(filter_level(false, 1, "warn"), "debug");
        assert_eq!(filter_level(false, 3, "warn"), "trace");
    }

    #[test]
    fn explicit_path_beats_directories() {
        let config = ObservabilityConfig::resolve(
            Some(PathBuf::from("/var/log/run.jsonl")),
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/run.jsonl")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let config = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/env")),
            Some(PathBuf::from("/config")),
        );
        assert_eq!(config.log_file, Some(Path::new("/env").join(LOG_FILE_NAME)));
    }

    #[test]
    fn no_sources_means_no_file() {
        assert_eq!(
            ObservabilityConfig::resolve(None, None, None),
            ObservabilityConfig::default()
        );
    }

    #[test]
    fn appender_creates_missing_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logs").join("run.jsonl");
        file_appender(&path).unwrap();
        assert!(tmp.path().join("logs").is_dir());
    }
}
