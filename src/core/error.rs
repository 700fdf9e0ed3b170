//! Error types for the logger facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Minimum level text matched no known severity
    #[error("Invalid log level: '{input}'")]
    InvalidLevel { input: String },

    /// Environment text matched no known deployment context
    #[error("Invalid environment: '{input}'")]
    InvalidEnvironment { input: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// An output path could not be opened while building the backend
    #[error("Failed to open sink '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(input: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            input: input.into(),
        }
    }

    /// Create an invalid environment error
    pub fn invalid_environment(input: impl Into<String>) -> Self {
        LoggerError::InvalidEnvironment {
            input: input.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink open error
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from building a backend rather than from
    /// parsing the caller's settings.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::SinkOpen { .. }
                | LoggerError::IoError(_)
        )
    }
}
