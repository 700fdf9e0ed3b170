//! Logging macros for ergonomic structured fields.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::{fields, info};
//!
//! let logger = new_default_logger(Environment::Testing, "info").unwrap();
//!
//! // Fields only
//! let request = fields!["method" => "GET", "status" => 200];
//! logger.info("request served", &request);
//!
//! // Message and fields in one go
//! let user_id = 42;
//! info!(logger, "user signed in", "user_id" => user_id, "mfa" => true);
//! ```

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_logger_facade::{fields, Field};
///
/// let fields = fields!["attempt" => 3, "host" => "db-1"];
/// assert_eq!(fields[0], Field::new("attempt", 3));
/// assert!(fields![].is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Field::new($key, $value)),+]
    };
}

/// Log a debug-level message with optional `key => value` fields.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.debug(&$message, &$crate::fields![$($key => $value),*])
    };
}

/// Log an info-level message with optional `key => value` fields.
#[macro_export]
macro_rules! info {
    ($logger:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.info(&$message, &$crate::fields![$($key => $value),*])
    };
}

/// Log a warn-level message with optional `key => value` fields.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.warn(&$message, &$crate::fields![$($key => $value),*])
    };
}

/// Log an error-level message with optional `key => value` fields.
#[macro_export]
macro_rules! error {
    ($logger:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.error(&$message, &$crate::fields![$($key => $value),*])
    };
}

/// Log a fatal message with optional `key => value` fields, then terminate.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.fatal(&$message, &$crate::fields![$($key => $value),*])
    };
}
