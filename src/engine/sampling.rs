//! Per-message sampling for high-volume scenarios
//!
//! Within each tick, the first `initial` records with a given level and
//! message are written, after which only every `thereafter`-th one is.
//! Counters reset when the tick elapses. Fatal records are never sampled.

use super::core::Core;
use crate::core::{LogLevel, Record, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sampling thresholds, applied per one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub initial: u64,
    pub thereafter: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            initial: 100,
            thereafter: 100,
        }
    }
}

struct Window {
    started: Instant,
    counts: HashMap<(LogLevel, String), u64>,
}

/// Wraps another core and drops repetitive records.
pub struct SampledCore {
    inner: Arc<dyn Core>,
    config: SamplingConfig,
    tick: Duration,
    window: Mutex<Window>,
    dropped: AtomicU64,
}

impl SampledCore {
    pub fn new(inner: Arc<dyn Core>, config: SamplingConfig) -> Self {
        Self::with_tick(inner, config, Duration::from_secs(1))
    }

    pub fn with_tick(inner: Arc<dyn Core>, config: SamplingConfig, tick: Duration) -> Self {
        Self {
            inner,
            config,
            tick,
            window: Mutex::new(Window {
                started: Instant::now(),
                counts: HashMap::new(),
            }),
            dropped: AtomicU64::new(0),
        }
    }

    /// Number of records dropped by sampling so far
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn should_sample(&self, record: &Record) -> bool {
        if record.level == LogLevel::Fatal {
            return true;
        }

        let mut window = self.window.lock();
        let now = Instant::now();
        if now.duration_since(window.started) >= self.tick {
            window.started = now;
            window.counts.clear();
        }

        let count = window
            .counts
            .entry((record.level, record.message.clone()))
            .or_insert(0);
        *count += 1;
        let n = *count;

        if n <= self.config.initial {
            return true;
        }
        self.config.thereafter > 0 && (n - self.config.initial) % self.config.thereafter == 0
    }
}

impl Core for SampledCore {
    fn enabled(&self, level: LogLevel) -> bool {
        self.inner.enabled(level)
    }

    fn write(&self, record: &Record) -> Result<()> {
        if self.should_sample(record) {
            self.inner.write(record)
        } else {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    fn sync(&self) -> Result<()> {
        self.inner.sync()
    }
}
