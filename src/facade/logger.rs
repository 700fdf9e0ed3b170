//! The logging interface application code depends on

use crate::core::{Field, LogLevel};

/// Settings a caller may ask a running logger to adopt.
///
/// Runtime reconfiguration is not implemented; [`Logger::reconfigure`]
/// accepts these options and ignores them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconfigureOptions {
    pub min_level: Option<LogLevel>,
    pub fields: Vec<Field>,
}

/// Small, stable logging interface.
///
/// Methods never fail; output errors are the backend's concern. `fatal`
/// terminates according to the backend and does not return.
///
/// The leveled methods and `reconfigure` are `#[track_caller]` here as well as
/// on implementations, so calls through `Box<dyn Logger>` report the caller's
/// own file and line.
pub trait Logger: Send + Sync {
    #[track_caller]
    fn debug(&self, message: &str, fields: &[Field]);
    #[track_caller]
    fn info(&self, message: &str, fields: &[Field]);
    #[track_caller]
    fn warn(&self, message: &str, fields: &[Field]);
    #[track_caller]
    fn error(&self, message: &str, fields: &[Field]);
    #[track_caller]
    fn fatal(&self, message: &str, fields: &[Field]) -> !;

    /// Derive an independent logger scoped by `name`
    fn new_named_logger(&self, name: &str) -> Box<dyn Logger>;

    #[track_caller]
    fn reconfigure(&self, options: ReconfigureOptions);
}
