//! # Rust Logger Facade
//!
//! A small, stable logging interface for application code, backed by a
//! pluggable structured logging engine.
//!
//! ## Features
//!
//! - **Stable Interface**: depend on [`Logger`], swap the backend freely
//! - **Environment Profiles**: JSON for production, colorized console elsewhere
//! - **Typed Fields**: key-value pairs instead of untyped argument lists
//! - **Named Loggers**: independent child loggers scoped by name
//!
//! ## Example
//!
//! ```no_run
//! use rust_logger_facade::prelude::*;
//!
//! let logger = new_default_logger(Environment::Production, "info")?;
//! logger.info("server started", &fields!["port" => 8080]);
//!
//! let worker = logger.new_named_logger("worker");
//! worker.debug("suppressed below info", &[]);
//! # Ok::<(), rust_logger_facade::LoggerError>(())
//! ```

pub mod core;
pub mod engine;
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{Backend, Field, FieldValue, LogLevel, LoggerError, Result};
    pub use crate::facade::{
        new_custom_logger, new_default_logger, new_logger_from_env, resolve_config, Environment,
        FacadeLogger, Logger, ReconfigureOptions,
    };
    pub use crate::fields;
}

pub use crate::core::{Backend, Caller, Field, FieldValue, LogLevel, LoggerError, Record, Result};
pub use crate::facade::{
    new_custom_logger, new_default_logger, new_logger_from_env, resolve_config, Environment,
    FacadeLogger, Logger, ReconfigureOptions,
};
