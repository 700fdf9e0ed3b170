//! Declarative backend configuration
//!
//! A [`BackendConfig`] describes a complete [`EngineLogger`]: threshold,
//! encoding, outputs, caller and stack trace reporting, sampling and initial
//! fields. It can be built in code from one of the two profiles or loaded
//! from JSON.
//!
//! # Example
//!
//! ```
//! use rust_logger_facade::engine::{BackendConfig, Encoding};
//!
//! let config = BackendConfig::from_json(r#"{
//!     "level": "warn",
//!     "encoding": "json",
//!     "output_paths": ["stdout"]
//! }"#).unwrap();
//!
//! assert_eq!(config.encoding, Encoding::Json);
//! assert!(config.build().is_ok());
//! ```

use super::core::{Core, IoCore};
use super::encoder::{EncoderConfig, Encoding};
use super::logger::EngineLogger;
use super::sampling::{SampledCore, SamplingConfig};
use crate::core::{Field, FieldValue, LogLevel, LoggerError, Result};
use crate::sinks::open_sinks;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Minimum level written
    pub level: LogLevel,
    pub encoding: Encoding,
    pub encoder: EncoderConfig,
    /// `stdout`, `stderr` or file paths
    pub output_paths: Vec<String>,
    /// Where failures to write records are reported
    pub error_output_paths: Vec<String>,
    pub disable_caller: bool,
    pub disable_stacktrace: bool,
    /// Lowest level that carries a stack trace when stack traces are enabled
    pub stacktrace_level: LogLevel,
    pub sampling: Option<SamplingConfig>,
    pub initial_fields: BTreeMap<String, FieldValue>,
}

impl BackendConfig {
    /// Machine-oriented profile: JSON to stderr, sampled, no stack traces.
    pub fn production(level: LogLevel) -> Self {
        Self {
            level,
            encoding: Encoding::Json,
            encoder: EncoderConfig::production(),
            output_paths: vec!["stderr".to_string()],
            error_output_paths: vec!["stderr".to_string()],
            disable_caller: false,
            disable_stacktrace: true,
            stacktrace_level: LogLevel::Error,
            sampling: Some(SamplingConfig::default()),
            initial_fields: BTreeMap::new(),
        }
    }

    /// Human-oriented profile: console encoding to stderr, stack traces from
    /// warnings up.
    pub fn development(level: LogLevel) -> Self {
        Self {
            level,
            encoding: Encoding::Console,
            encoder: EncoderConfig::development(),
            output_paths: vec!["stderr".to_string()],
            error_output_paths: vec!["stderr".to_string()],
            disable_caller: false,
            disable_stacktrace: false,
            stacktrace_level: LogLevel::Warn,
            sampling: None,
            initial_fields: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Open the configured outputs and assemble the logger.
    pub fn build(&self) -> Result<EngineLogger> {
        if self.output_paths.is_empty() {
            return Err(LoggerError::config(
                "output_paths",
                "at least one output path is required",
            ));
        }
        if self.encoder.message_key.is_empty() {
            return Err(LoggerError::config("encoder", "message_key must not be empty"));
        }

        let sinks = open_sinks(&self.output_paths)?;
        let error_sinks = open_sinks(&self.error_output_paths)?;

        let mut core: Arc<dyn Core> = Arc::new(IoCore::new(
            self.level,
            self.encoding,
            self.encoder.clone(),
            sinks,
        ));
        if let Some(sampling) = self.sampling {
            core = Arc::new(SampledCore::new(core, sampling));
        }

        let stacktrace_level = (!self.disable_stacktrace).then_some(self.stacktrace_level);
        let logger = EngineLogger::from_core(core)
            .with_caller(!self.disable_caller)
            .with_stacktrace(stacktrace_level)
            .with_error_output(error_sinks);

        if self.initial_fields.is_empty() {
            Ok(logger)
        } else {
            Ok(logger.with(
                self.initial_fields
                    .iter()
                    .map(|(key, value)| Field::new(key.clone(), value.clone())),
            ))
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::production(LogLevel::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Backend;
    use std::fs;
    use std::panic::Location;
    use tempfile::tempdir;

    #[test]
    fn test_profiles() {
        let prod = BackendConfig::production(LogLevel::Warn);
        assert_eq!(prod.level, LogLevel::Warn);
        assert_eq!(prod.encoding, Encoding::Json);
        assert!(prod.disable_stacktrace);
        assert!(prod.sampling.is_some());

        let dev = BackendConfig::development(LogLevel::Debug);
        assert_eq!(dev.encoding, Encoding::Console);
        assert!(!dev.disable_stacktrace);
        assert!(dev.sampling.is_none());
    }

    #[test]
    fn test_build_requires_output_paths() {
        let mut config = BackendConfig::development(LogLevel::Info);
        config.output_paths.clear();

        let err = config.build().unwrap_err();
        assert!(err.is_construction_error());
        assert!(err.to_string().contains("output_paths"));
    }

    #[test]
    fn test_build_fails_on_unopenable_output() {
        let dir = tempdir().unwrap();
        let mut config = BackendConfig::production(LogLevel::Info);
        config.output_paths = vec![dir
            .path()
            .join("missing")
            .join("app.log")
            .display()
            .to_string()];

        assert!(matches!(config.build(), Err(LoggerError::SinkOpen { .. })));
    }

    #[test]
    fn test_build_writes_initial_fields() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.jsonl");

        let mut config = BackendConfig::production(LogLevel::Info);
        config.output_paths = vec![path.display().to_string()];
        config.initial_fields.insert("service".into(), "billing".into());

        let logger = config.build()?;
        logger.info("started", &[], Location::caller());
        logger.sync()?;

        let content = fs::read_to_string(&path)?;
        let parsed: serde_json::Value = serde_json::from_str(content.trim())?;
        assert_eq!(parsed["service"], "billing");
        assert_eq!(parsed["msg"], "started");
        Ok(())
    }

    #[test]
    fn test_json_roundtrip_keeps_settings() -> Result<()> {
        let config = BackendConfig::development(LogLevel::Error);
        let parsed = BackendConfig::from_json(&config.to_json()?)?;
        assert_eq!(parsed, config);
        Ok(())
    }

    #[test]
    fn test_from_json_rejects_unknown_level() {
        let err = BackendConfig::from_json(r#"{"level": "verbose"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
