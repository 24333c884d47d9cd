//! Diagnostics of a single pipeline run
//!
//! The pipeline never writes to a global sink directly. It records into a `RunLog`
//! owned by the caller, which keeps a bounded ring of recent lines and forwards every
//! record to the `log` facade. The process-wide logger is configured by the binary.

use log::{Level, LevelFilter};
use std::collections::VecDeque;

const LOG_TARGET: &str = "mdtidy::run";

#[derive(Debug, Clone)]
pub struct RunLog {
    level: LevelFilter,
    capacity: usize,
    lines: VecDeque<String>,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new(LevelFilter::Error, Self::DEFAULT_CAPACITY)
    }
}

impl RunLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
        }
    }

    /// Record a message. It always reaches the `log` facade; it is kept in the ring
    /// only when `level` passes this log's filter.
    pub fn record(&mut self, level: Level, message: impl AsRef<str>) {
        let message = message.as_ref();
        log::log!(target: LOG_TARGET, level, "{message}");

        if level > self.level || self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(format!("[{level}] {message}"));
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every recorded line; the level is kept
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
