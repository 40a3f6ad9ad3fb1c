//! File logging. The terminal belongs to the sky, so log lines go to disk.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use cosmos_config::LogConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_FILTER: &str = "info";

/// Filter from `RUST_LOG` if set, else the configured directive.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Parse a directive, falling back to `info` when it does not parse.
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

fn open_log(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

/// Install the global subscriber writing to the configured log file.
///
/// Returns the file in use, or `None` when no file could be opened, in
/// which case logging stays off.
pub fn init_logging(config: &LogConfig) -> Option<PathBuf> {
    let path = config.path()?;
    let file = open_log(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(file_layer)
        .try_init()
        .ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert!(level_filter("debug").to_string().contains("debug"));
        let scoped = level_filter("warn,cosmos_scene=trace");
        assert!(scoped.to_string().contains("cosmos_scene=trace"));
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        assert_eq!(level_filter("cosmos=loud").to_string(), FALLBACK_FILTER);
    }

    #[test]
    fn test_open_log_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cosmos.log");
        assert!(open_log(&path).is_some());
        assert!(path.exists());
    }
}
