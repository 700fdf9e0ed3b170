//! Basic usage of the logger facade
//!
//! Run with `ENVIRONMENT=production LOG_LEVEL=debug` to see the JSON profile.

use rust_logger_facade::prelude::*;
use rust_logger_facade::{info, warn};

fn main() -> Result<()> {
    let logger = new_logger_from_env()?;

    logger.info("application started", &fields!["version" => "0.1.0"]);
    logger.debug("only visible at debug level", &[]);

    let worker = logger.new_named_logger("worker");
    info!(worker, "job picked up", "job_id" => 17, "queue" => "emails");
    warn!(worker, "job retried", "job_id" => 17, "attempt" => 2);

    // Not implemented: logs a warning and leaves the logger as it was
    logger.reconfigure(ReconfigureOptions {
        min_level: Some(LogLevel::Debug),
        ..Default::default()
    });

    logger.error("shutting down after error", &fields!["reason" => "demo"]);
    Ok(())
}
