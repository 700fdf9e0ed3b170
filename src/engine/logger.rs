//! The built-in backend logger handle

use super::core::Core;
use crate::core::{Backend, Caller, Field, LogLevel, Record, Result, Sink};
use crate::sinks::ConsoleSink;
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// What happens after a fatal record has been written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalHook {
    /// Exit the process with the given status code
    Exit(i32),
    /// Panic with the fatal message; lets tests observe fatal calls
    Panic,
}

impl Default for FatalHook {
    fn default() -> Self {
        FatalHook::Exit(1)
    }
}

/// Structured logger backed by a [`Core`].
///
/// Cloning is cheap: the core and error outputs are shared, while the name
/// and context fields belong to each handle.
#[derive(Clone)]
pub struct EngineLogger {
    core: Arc<dyn Core>,
    name: Option<String>,
    context: Vec<Field>,
    add_caller: bool,
    stacktrace_level: Option<LogLevel>,
    fatal_hook: FatalHook,
    error_output: Arc<Vec<Arc<dyn Sink>>>,
}

impl EngineLogger {
    pub fn new(core: impl Core + 'static) -> Self {
        Self::from_core(Arc::new(core))
    }

    pub fn from_core(core: Arc<dyn Core>) -> Self {
        Self {
            core,
            name: None,
            context: Vec::new(),
            add_caller: true,
            stacktrace_level: None,
            fatal_hook: FatalHook::default(),
            error_output: Arc::new(vec![Arc::new(ConsoleSink::stderr()) as Arc<dyn Sink>]),
        }
    }

    /// Report (or stop reporting) the call site of each record
    #[must_use]
    pub fn with_caller(mut self, add_caller: bool) -> Self {
        self.add_caller = add_caller;
        self
    }

    /// Attach a stack trace to records at `level` and above; `None` disables
    #[must_use]
    pub fn with_stacktrace(mut self, level: Option<LogLevel>) -> Self {
        self.stacktrace_level = level;
        self
    }

    #[must_use]
    pub fn with_fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = hook;
        self
    }

    /// Where failures to write records are reported
    #[must_use]
    pub fn with_error_output(mut self, sinks: Vec<Arc<dyn Sink>>) -> Self {
        self.error_output = Arc::new(sinks);
        self
    }

    /// Derive a logger that adds `fields` to every record it writes
    #[must_use]
    pub fn with(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut child = self.clone();
        child.context.extend(fields);
        child
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn context(&self) -> &[Field] {
        &self.context
    }

    pub fn fatal_hook(&self) -> FatalHook {
        self.fatal_hook
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    fn build_record(
        &self,
        level: LogLevel,
        message: &str,
        fields: &[Field],
        caller: &'static Location<'static>,
    ) -> Record {
        let mut all_fields = Vec::with_capacity(self.context.len() + fields.len());
        all_fields.extend_from_slice(&self.context);
        all_fields.extend_from_slice(fields);

        let mut record = Record::new(level, message)
            .with_name(self.name.clone())
            .with_fields(all_fields);

        if self.add_caller {
            record = record.with_caller(Caller::from(caller));
        }
        if self.stacktrace_level.is_some_and(|min| level >= min) {
            record = record.with_stacktrace(Backtrace::force_capture().to_string());
        }
        record
    }

    fn write(&self, record: &Record) {
        if let Err(e) = self.core.write(record) {
            let line = format!(
                "{} write error: {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                e
            );
            for sink in self.error_output.iter() {
                let _ = sink.write_line(&line);
                let _ = sink.flush();
            }
        }
    }
}

impl Backend for EngineLogger {
    fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: &[Field],
        caller: &'static Location<'static>,
    ) {
        if !self.core.enabled(level) {
            return;
        }
        let record = self.build_record(level, message, fields, caller);
        self.write(&record);
    }

    fn fatal(&self, message: &str, fields: &[Field], caller: &'static Location<'static>) -> ! {
        if self.core.enabled(LogLevel::Fatal) {
            let record = self.build_record(LogLevel::Fatal, message, fields, caller);
            self.write(&record);
        }
        let _ = self.core.sync();

        match self.fatal_hook {
            FatalHook::Exit(code) => std::process::exit(code),
            FatalHook::Panic => panic!("{}", message),
        }
    }

    fn named(&self, name: &str) -> Self {
        let mut child = self.clone();
        if name.is_empty() {
            return child;
        }
        child.name = Some(match &self.name {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        });
        child
    }

    fn sync(&self) -> Result<()> {
        self.core.sync()
    }
}

impl fmt::Debug for EngineLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineLogger")
            .field("name", &self.name)
            .field("context", &self.context)
            .field("add_caller", &self.add_caller)
            .field("stacktrace_level", &self.stacktrace_level)
            .field("fatal_hook", &self.fatal_hook)
            .finish_non_exhaustive()
    }
}
