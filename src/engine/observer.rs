//! In-memory core that records everything it is given, for assertions in tests.
//!
//! # Example
//!
//! ```
//! use rust_logger_facade::engine::{observer, EngineLogger};
//! use rust_logger_facade::{Backend, LogLevel};
//! use std::panic::Location;
//!
//! let (core, logs) = observer::new(LogLevel::Info);
//! let logger = EngineLogger::new(core);
//!
//! logger.info("cache warmed", &[], Location::caller());
//! logger.debug("not recorded", &[], Location::caller());
//!
//! assert_eq!(logs.len(), 1);
//! assert_eq!(logs.all()[0].message, "cache warmed");
//! ```

use super::core::Core;
use crate::core::{LogLevel, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared view over the records captured by an [`ObserverCore`].
#[derive(Debug, Clone, Default)]
pub struct ObservedLogs {
    records: Arc<Mutex<Vec<Record>>>,
}

impl ObservedLogs {
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of every record so far, oldest first
    pub fn all(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Remove and return every record so far
    pub fn take_all(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn filter_message(&self, message: &str) -> Vec<Record> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.message == message)
            .cloned()
            .collect()
    }

    pub fn filter_level(&self, level: LogLevel) -> Vec<Record> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    pub fn filter_name(&self, name: &str) -> Vec<Record> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.logger_name.as_deref() == Some(name))
            .cloned()
            .collect()
    }
}

pub struct ObserverCore {
    min_level: LogLevel,
    logs: ObservedLogs,
}

impl Core for ObserverCore {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn write(&self, record: &Record) -> Result<()> {
        self.logs.records.lock().push(record.clone());
        Ok(())
    }

    fn sync(&self) -> Result<()> {
        Ok(())
    }
}

/// Create an observing core enabled at `min_level` and above, together with
/// the handle used to inspect what it captured.
pub fn new(min_level: LogLevel) -> (ObserverCore, ObservedLogs) {
    let logs = ObservedLogs::default();
    let core = ObserverCore {
        min_level,
        logs: logs.clone(),
    };
    (core, logs)
}
