use thiserror::Error;

/// Startup-time errors.
///
/// Per-request failures never surface here: the relay handler absorbs them
/// into the answer text. Only configuration and listener setup can fail the
/// process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}
