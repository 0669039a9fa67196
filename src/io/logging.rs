use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid RUST_LOG / log filter: {0}")]
    Filter(String),
}

/// Default filter level for a `-v` count
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the TUI, so events only go to `log_file`. Without
/// one no subscriber is installed and events are dropped.
pub fn init_logging(log_file: Option<&Path>, verbose: u8) -> Result<(), LoggingError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source: e,
        })?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbose)))
        .map_err(|e| LoggingError::Filter(e.to_string()))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }

    #[test]
    fn no_log_file_is_noop() {
        assert!(init_logging(None, 3).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("tt.log");
        let err = init_logging(Some(&path), 0).unwrap_err();
        assert!(matches!(err, LoggingError::OpenLogFile { .. }));
    }
}
