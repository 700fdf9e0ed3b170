//! Sink trait for encoded log output destinations

use super::error::Result;

/// Destination for encoded log lines.
///
/// Sinks are shared between a logger and all of its named children, so they
/// take `&self` and guard their writers internally.
pub trait Sink: Send + Sync {
    /// Write one encoded record. `line` carries no trailing newline.
    fn write_line(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
