//! Chooses a backend configuration for a deployment environment

use super::environment::Environment;
use crate::core::{LogLevel, Result};
use crate::engine::{BackendConfig, LevelEncoding};

/// Derive the backend configuration for `environment` at `raw_min_level`.
///
/// The level is matched case-insensitively against `debug`, `info`, `warn`,
/// `error` and `fatal`; anything else is an
/// [`InvalidLevel`](crate::LoggerError::InvalidLevel) error. Production gets
/// the JSON profile, every other environment the colorized console profile.
///
/// # Example
///
/// ```
/// use rust_logger_facade::engine::Encoding;
/// use rust_logger_facade::{resolve_config, Environment, LogLevel};
///
/// let config = resolve_config(Environment::Production, "WARN").unwrap();
/// assert_eq!(config.level, LogLevel::Warn);
/// assert_eq!(config.encoding, Encoding::Json);
/// assert!(config.disable_stacktrace);
/// ```
pub fn resolve_config(environment: Environment, raw_min_level: &str) -> Result<BackendConfig> {
    let min_level: LogLevel = raw_min_level.parse()?;

    let config = match environment {
        Environment::Production => BackendConfig::production(min_level),
        _ => {
            let mut config = BackendConfig::development(min_level);
            config.encoder.level_encoding = LevelEncoding::CapitalColor;
            config
        }
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::engine::Encoding;

    #[test]
    fn test_production_profile() {
        let config = resolve_config(Environment::Production, "info").unwrap();

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.encoding, Encoding::Json);
        assert_eq!(config.encoder.level_encoding, LevelEncoding::Lowercase);
        assert!(config.disable_stacktrace);
        assert!(!config.disable_caller);
    }

    #[test]
    fn test_non_production_profiles_are_colorized_console() {
        for env in [
            Environment::Development,
            Environment::Testing,
            Environment::Staging,
        ] {
            let config = resolve_config(env, "Debug").unwrap();

            assert_eq!(config.level, LogLevel::Debug);
            assert_eq!(config.encoding, Encoding::Console);
            assert_eq!(config.encoder.level_encoding, LevelEncoding::CapitalColor);
            assert!(!config.disable_caller);
        }
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        for raw in ["verbose", ""] {
            assert!(matches!(
                resolve_config(Environment::Production, raw),
                Err(LoggerError::InvalidLevel { .. })
            ));
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(
            resolve_config(Environment::Staging, "error").unwrap(),
            resolve_config(Environment::Staging, "ERROR").unwrap()
        );
    }
}
