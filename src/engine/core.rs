//! Cores decide whether a record is wanted and where it goes

use super::encoder::{EncoderConfig, Encoding};
use crate::core::{LogLevel, LoggerError, Record, Result, Sink};
use std::sync::Arc;

/// Destination for assembled records.
///
/// An [`EngineLogger`](super::EngineLogger) checks `enabled` before doing
/// any work, so `write` only sees records the core asked for.
pub trait Core: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
    fn write(&self, record: &Record) -> Result<()>;
    fn sync(&self) -> Result<()>;
}

/// Encodes records and writes them to every configured sink.
pub struct IoCore {
    min_level: LogLevel,
    encoding: Encoding,
    encoder: EncoderConfig,
    sinks: Vec<Arc<dyn Sink>>,
}

impl IoCore {
    pub fn new(
        min_level: LogLevel,
        encoding: Encoding,
        encoder: EncoderConfig,
        sinks: Vec<Arc<dyn Sink>>,
    ) -> Self {
        Self {
            min_level,
            encoding,
            encoder,
            sinks,
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl Core for IoCore {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn write(&self, record: &Record) -> Result<()> {
        let line = self.encoding.encode(&self.encoder, record)?;

        // Every sink gets the record even if an earlier one fails
        let mut failures = Vec::new();
        for sink in &self.sinks {
            if let Err(e) = sink.write_line(&line) {
                failures.push(format!("{}: {}", sink.name(), e));
            }
        }

        // Flush errors right away; a failed flush is reported with the writes
        if record.level >= LogLevel::Error {
            if let Err(e) = self.sync() {
                failures.push(format!("sync: {}", e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::IoError(std::io::Error::other(failures.join("; "))))
        }
    }

    fn sync(&self) -> Result<()> {
        let mut failures = Vec::new();
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                failures.push(format!("{}: {}", sink.name(), e));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::IoError(std::io::Error::other(failures.join("; "))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write_line(&self, _line: &str) -> Result<()> {
            Err(LoggerError::IoError(std::io::Error::other("disk gone")))
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    struct UnflushableSink;

    impl Sink for UnflushableSink {
        fn write_line(&self, _line: &str) -> Result<()> {
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Err(LoggerError::IoError(std::io::Error::other("flush refused")))
        }

        fn name(&self) -> &str {
            "unflushable"
        }
    }

    #[test]
    fn test_level_threshold() {
        let core = IoCore::new(
            LogLevel::Warn,
            Encoding::Json,
            EncoderConfig::production(),
            Vec::new(),
        );

        assert!(!core.enabled(LogLevel::Debug));
        assert!(!core.enabled(LogLevel::Info));
        assert!(core.enabled(LogLevel::Warn));
        assert!(core.enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_failing_sink_does_not_starve_others() {
        let memory = MemorySink::new();
        let core = IoCore::new(
            LogLevel::Debug,
            Encoding::Json,
            EncoderConfig::production(),
            vec![
                Arc::new(BrokenSink) as Arc<dyn Sink>,
                Arc::new(memory.clone()),
            ],
        );

        let result = core.write(&Record::new(LogLevel::Info, "hello"));

        assert!(result.unwrap_err().to_string().contains("broken: "));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_error_reports_write_and_flush_failures_together() {
        let memory = MemorySink::new();
        let core = IoCore::new(
            LogLevel::Debug,
            Encoding::Json,
            EncoderConfig::production(),
            vec![
                Arc::new(BrokenSink) as Arc<dyn Sink>,
                Arc::new(UnflushableSink),
                Arc::new(memory.clone()),
            ],
        );

        let message = core
            .write(&Record::new(LogLevel::Error, "boom"))
            .unwrap_err()
            .to_string();

        assert!(message.contains("broken: "), "{}", message);
        assert!(message.contains("flush refused"), "{}", message);
        assert_eq!(memory.len(), 1);
    }
}
