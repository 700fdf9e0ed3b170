//! `Logger` implementation forwarding to a [`Backend`]

use super::logger::{Logger, ReconfigureOptions};
use crate::core::{Backend, Field};
use std::panic::Location;

pub(crate) const RECONFIGURE_WARNING: &str = "reconfigure is not implemented";

/// Wraps exactly one backend handle and forwards every call to it.
///
/// Each method captures the location it was called from and passes it on, so
/// the reported call site is the facade's caller and never this adapter.
#[derive(Debug, Clone)]
pub struct FacadeLogger<B: Backend> {
    backend: B,
}

impl<B: Backend> FacadeLogger<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: Backend> Logger for FacadeLogger<B> {
    #[track_caller]
    fn debug(&self, message: &str, fields: &[Field]) {
        self.backend.debug(message, fields, Location::caller());
    }

    #[track_caller]
    fn info(&self, message: &str, fields: &[Field]) {
        self.backend.info(message, fields, Location::caller());
    }

    #[track_caller]
    fn warn(&self, message: &str, fields: &[Field]) {
        self.backend.warn(message, fields, Location::caller());
    }

    #[track_caller]
    fn error(&self, message: &str, fields: &[Field]) {
        self.backend.error(message, fields, Location::caller());
    }

    #[track_caller]
    fn fatal(&self, message: &str, fields: &[Field]) -> ! {
        self.backend.fatal(message, fields, Location::caller())
    }

    fn new_named_logger(&self, name: &str) -> Box<dyn Logger> {
        Box::new(FacadeLogger::new(self.backend.named(name)))
    }

    #[track_caller]
    fn reconfigure(&self, _options: ReconfigureOptions) {
        self.backend
            .warn(RECONFIGURE_WARNING, &[], Location::caller());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::engine::{observer, EngineLogger, FatalHook};

    fn observed(level: LogLevel) -> (FacadeLogger<EngineLogger>, observer::ObservedLogs) {
        let (core, logs) = observer::new(level);
        let backend = EngineLogger::new(core).with_fatal_hook(FatalHook::Panic);
        (FacadeLogger::new(backend), logs)
    }

    #[test]
    fn test_reported_caller_is_facade_caller() {
        let (logger, logs) = observed(LogLevel::Debug);

        let line = line!() + 1;
        logger.info("hello", &[]);

        let caller = logs.all()[0].caller.expect("caller recorded");
        assert_eq!(caller.file, file!());
        assert_eq!(caller.line, line);
    }

    #[test]
    fn test_verbs_map_to_levels() {
        let (logger, logs) = observed(LogLevel::Debug);

        logger.debug("d", &[]);
        logger.info("i", &[]);
        logger.warn("w", &[]);
        logger.error("e", &[]);

        let levels: Vec<LogLevel> = logs.all().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error]
        );
    }

    #[test]
    fn test_reconfigure_warns_once_and_changes_nothing() {
        let (logger, logs) = observed(LogLevel::Info);

        logger.reconfigure(ReconfigureOptions {
            min_level: Some(LogLevel::Debug),
            ..Default::default()
        });
        logger.debug("still suppressed", &[]);

        let records = logs.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[0].message, RECONFIGURE_WARNING);
    }

    #[test]
    fn test_boxed_logger_reports_facade_caller() {
        let (logger, logs) = observed(LogLevel::Debug);
        let logger: Box<dyn Logger> = Box::new(logger);

        let line = line!() + 1;
        logger.warn("through dyn", &[]);
        logger.reconfigure(ReconfigureOptions::default());

        let records = logs.all();
        let warned = records[0].caller.expect("caller recorded");
        let reconfigured = records[1].caller.expect("caller recorded");
        assert_eq!((warned.file, warned.line), (file!(), line));
        assert_eq!((reconfigured.file, reconfigured.line), (file!(), line + 1));
    }

    #[test]
    fn test_reconfigure_warning_is_subject_to_threshold() {
        for level in [LogLevel::Error, LogLevel::Fatal] {
            let (logger, logs) = observed(level);

            logger.reconfigure(ReconfigureOptions {
                min_level: Some(LogLevel::Debug),
                ..Default::default()
            });

            assert!(logs.is_empty(), "{} logger emitted the warning", level);
        }
    }

    #[test]
    #[should_panic(expected = "cannot continue")]
    fn test_fatal_is_not_intercepted() {
        let (logger, _logs) = observed(LogLevel::Debug);
        logger.fatal("cannot continue", &[]);
    }
}
