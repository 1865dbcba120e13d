//! `DecisionLog` — bounded, newest-first record of engine decisions.
//!
//! # Why this exists
//!
//! The engine never surfaces errors during ticking; everything it decides or
//! observes — completions, occupied blocks, junction arbitration — becomes a
//! log entry instead.  The log is the operator's only window into *why* a
//! signal is at danger.
//!
//! The log is bounded: only the most recent [`LOG_CAPACITY`] entries are
//! retained, oldest evicted first.  There is no deduplication and no
//! persistence across restarts.

use std::collections::VecDeque;
use std::fmt;

use rail_core::Timestamp;

/// Maximum number of retained entries.
pub const LOG_CAPACITY: usize = 100;

// ── Severity ──────────────────────────────────────────────────────────────────

/// Weight of a decision-log entry.  Serialized as `"INFO"` / `"WARNING"` /
/// `"ACTION"`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Routine observation (journey completions, startup).
    Info,
    /// Contention detected (junction conflicts).
    Warning,
    /// A signal was actively held or forced.
    Action,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Action => "ACTION",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LogEntry ──────────────────────────────────────────────────────────────────

/// One recorded decision.
#[derive(Clone, Debug, serde::Serialize)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub level: Severity,
    pub message: String,
}

// ── DecisionLog ───────────────────────────────────────────────────────────────

/// Append-only (from the engine's perspective) bounded log, newest entry
/// first.
#[derive(Clone, Debug)]
pub struct DecisionLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl DecisionLog {
    /// A log with the standard [`LOG_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    /// A log with a custom capacity (tests exercise eviction with small
    /// capacities).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert an entry at the head; evict the oldest entry past capacity.
    pub fn record(&mut self, now: Timestamp, level: Severity, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            timestamp: now,
            level,
            message: message.into(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Entries with `timestamp` strictly greater than `since`, newest first.
    ///
    /// `Timestamp::ZERO` returns everything.
    pub fn entries_since(&self, since: Timestamp) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|e| e.timestamp > since)
            .cloned()
            .collect()
    }

    /// Iterate all entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new()
    }
}
