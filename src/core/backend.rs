//! The contract a structured logging backend offers to the facade

use super::{error::Result, field::Field, log_level::LogLevel};
use std::panic::Location;

/// A leveled structured logger the facade can forward to.
///
/// `caller` is the location the facade was called from. Backends that report
/// call sites use it as is; they never need to skip frames of their own.
///
/// Implementations must be safe to share between threads. The facade never
/// mutates a backend after construction.
pub trait Backend: Send + Sync + 'static {
    /// Write a record at `level` if the backend is enabled for it.
    fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: &[Field],
        caller: &'static Location<'static>,
    );

    /// Write a fatal record, then terminate. Never returns.
    fn fatal(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) -> !;

    /// Derive a child backend scoped by `name`. The receiver is unchanged.
    fn named(&self, name: &str) -> Self
    where
        Self: Sized;

    fn debug(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) {
        self.log(LogLevel::Debug, message, fields, caller);
    }

    fn info(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) {
        self.log(LogLevel::Info, message, fields, caller);
    }

    fn warn(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) {
        self.log(LogLevel::Warn, message, fields, caller);
    }

    fn error(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) {
        self.log(LogLevel::Error, message, fields, caller);
    }

    /// Flush any buffered output
    fn sync(&self) -> Result<()> {
        Ok(())
    }
}
