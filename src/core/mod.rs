//! Core logger types and traits

pub mod backend;
pub mod error;
pub mod field;
pub mod log_level;
pub mod record;
pub mod sink;

pub use backend::Backend;
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use log_level::LogLevel;
pub use record::{Caller, Record};
pub use sink::Sink;
