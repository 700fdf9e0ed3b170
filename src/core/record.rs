//! Log record structure

use super::field::Field;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

/// Source location a record was logged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub file: &'static str,
    pub line: u32,
}

impl From<&'static Location<'static>> for Caller {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A fully assembled record, as handed to a [`Core`](crate::engine::Core).
#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub logger_name: Option<String>,
    pub caller: Option<Caller>,
    /// Context fields of the logger followed by the call's own fields
    pub fields: Vec<Field>,
    pub stacktrace: Option<String>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            logger_name: None,
            caller: None,
            fields: Vec::new(),
            stacktrace: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.logger_name = name;
        self
    }

    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: String) -> Self {
        self.stacktrace = Some(stacktrace);
        self
    }

    /// Look up the last field with the given key
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().rev().find(|f| f.key == key)
    }
}
