//! File sink implementation

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends encoded records to a file, creating it if needed.
pub struct FileSink {
    path: PathBuf,
    label: String,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let label = path.display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(label.clone(), e))?;

        Ok(Self {
            path,
            label,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends_lines() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n")?;

        let sink = FileSink::open(&path)?;
        sink.write_line("first")?;
        sink.write_line("second")?;
        sink.flush()?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content, "existing\nfirst\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        match FileSink::open(&path) {
            Err(LoggerError::SinkOpen { path: p, .. }) => assert!(p.ends_with("app.log")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening a file in a missing directory should fail"),
        }
    }
}
