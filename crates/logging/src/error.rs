//! crates/logging/src/error.rs
//! Errors produced while turning a [`LogConfig`] into a backend logger.

use std::io;

use thiserror::Error;

use super::config::LogConfig;
use super::severity::ParseSeverityError;

/// Failure to construct a logger from a [`LogConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured minimum severity is not a known level.
    #[error(transparent)]
    Severity(#[from] ParseSeverityError),
    /// The configured name matches no backend.
    #[error("unknown logger: {0}")]
    UnknownBackend(LogConfig),
    /// The backend could not acquire its destination.
    #[error("failed to construct logger from {config}: {source}")]
    Construction {
        /// Configuration that was being applied.
        config: LogConfig,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Wraps an I/O failure raised while applying `config`.
    pub fn construction(config: &LogConfig, source: io::Error) -> Self {
        Self::Construction {
            config: config.clone(),
            source,
        }
    }

    /// Returns the configuration attached to the error, when there is one.
    pub fn config(&self) -> Option<&LogConfig> {
        match self {
            Self::Severity(_) => None,
            Self::UnknownBackend(config) | Self::Construction { config, .. } => Some(config),
        }
    }
}
