use crate::io::config_io::ConfigError;
use crate::io::logging::LoggingError;

/// Top-level failure of the `tt` binary
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
