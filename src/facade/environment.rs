//! Deployment environment classification

use crate::core::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`Environment::from_env`]
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// Read `ENVIRONMENT`, falling back to `Development` when it is unset.
    pub fn from_env() -> Result<Self, LoggerError> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Environment::default()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "test" | "testing" => Ok(Environment::Testing),
            "stage" | "staging" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(LoggerError::invalid_environment(s)),
        }
    }
}
