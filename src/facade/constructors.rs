//! Entry points that produce a ready `Logger`

use super::adapter::FacadeLogger;
use super::environment::Environment;
use super::logger::Logger;
use super::resolver::resolve_config;
use crate::core::{Backend, Result};

/// Environment variable read by [`new_logger_from_env`]
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Level used by [`new_logger_from_env`] when `LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build a logger for `environment` that writes records at `raw_min_level`
/// and above.
///
/// Fails with `InvalidLevel` for unknown level text, or with a construction
/// error when the backend's outputs cannot be opened.
pub fn new_default_logger(environment: Environment, raw_min_level: &str) -> Result<Box<dyn Logger>> {
    let config = resolve_config(environment, raw_min_level)?;
    new_custom_logger(|| config.build())
}

/// Build a logger around whatever backend `configure` produces.
///
/// `configure` is called exactly once. Its error is returned unchanged.
///
/// # Example
///
/// ```
/// use rust_logger_facade::engine::{observer, EngineLogger};
/// use rust_logger_facade::{fields, new_custom_logger, LogLevel, Logger};
/// use std::convert::Infallible;
///
/// let (core, logs) = observer::new(LogLevel::Debug);
/// let logger = new_custom_logger(|| Ok::<_, Infallible>(EngineLogger::new(core))).unwrap();
///
/// logger.info("user created", &fields!["user_id" => 42]);
/// assert_eq!(logs.len(), 1);
/// ```
pub fn new_custom_logger<B, E, F>(configure: F) -> std::result::Result<Box<dyn Logger>, E>
where
    B: Backend,
    F: FnOnce() -> std::result::Result<B, E>,
{
    let backend = configure()?;
    Ok(Box::new(FacadeLogger::new(backend)))
}

/// Build a default logger from `ENVIRONMENT` and `LOG_LEVEL`.
pub fn new_logger_from_env() -> Result<Box<dyn Logger>> {
    let environment = Environment::from_env()?;
    let raw_min_level =
        std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    new_default_logger(environment, &raw_min_level)
}
