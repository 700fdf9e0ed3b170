//! Sink implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleSink, ConsoleStream};
pub use file::FileSink;
pub use memory::MemorySink;

pub use crate::core::Sink;

use crate::core::Result;
use std::sync::Arc;

/// Open an output path: `stdout`, `stderr`, or a file path opened for append.
pub fn open_sink(path: &str) -> Result<Arc<dyn Sink>> {
    match path {
        "stdout" => Ok(Arc::new(ConsoleSink::stdout())),
        "stderr" => Ok(Arc::new(ConsoleSink::stderr())),
        other => Ok(Arc::new(FileSink::open(other)?)),
    }
}

/// Open every path, failing on the first one that cannot be opened.
pub fn open_sinks(paths: &[String]) -> Result<Vec<Arc<dyn Sink>>> {
    paths.iter().map(|path| open_sink(path)).collect()
}
