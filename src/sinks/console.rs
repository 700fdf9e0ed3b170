//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}
