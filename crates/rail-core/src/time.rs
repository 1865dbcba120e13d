//! Wall-clock time model.
//!
//! # Design
//!
//! The engine advances trains by real elapsed time, not by a fixed step: each
//! train records the instant it was last updated, and a tick computes
//! `speed × elapsed_hours` from the difference.  [`Timestamp`] is therefore a
//! Unix wall-clock instant in fractional seconds, matching the epoch-seconds
//! `since` parameter of the read-state interface.
//!
//! Time acquisition goes through the [`Clock`] trait so the engine can be
//! driven with a [`ManualClock`] in tests — exact elapsed values, exact
//! advancement arithmetic, no sleeping.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A Unix wall-clock instant in fractional seconds.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// The epoch itself — the default `since` bound (everything is newer).
    pub const ZERO: Timestamp = Timestamp(0.0);

    /// Seconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn seconds_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    /// Hours elapsed from `earlier` to `self`.  Train speeds are in
    /// units/hour, so advancement is `speed * now.hours_since(last_update)`.
    #[inline]
    pub fn hours_since(self, earlier: Timestamp) -> f64 {
        self.seconds_since(earlier) / 3600.0
    }

    /// The instant `secs` seconds after `self`.
    #[inline]
    pub fn offset_secs(self, secs: f64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Parse a transport-layer `since` parameter.
    ///
    /// Malformed input is coerced to [`Timestamp::ZERO`] rather than
    /// rejected — a bad `since` degrades to "return all log entries".
    pub fn coerce_secs(raw: &str) -> Timestamp {
        Timestamp(raw.trim().parse().unwrap_or(0.0))
    }
}

impl std::ops::Sub for Timestamp {
    type Output = f64;

    /// Elapsed seconds between two instants.
    #[inline]
    fn sub(self, rhs: Timestamp) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of the current wall-clock instant.
///
/// The engine is generic over `Clock`, which is the seam that makes every
/// tick-level property testable: production uses [`SystemClock`], tests use
/// [`ManualClock`] and advance it by exact amounts.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Reads the operating-system clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(elapsed.as_secs_f64())
    }
}

/// A manually driven clock for deterministic tests and replays.
///
/// Cloning shares the underlying instant, so a test can hand one clone to the
/// engine and keep another to advance time from outside.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    secs: Arc<Mutex<f64>>,
}

impl ManualClock {
    /// Create a clock frozen at `start_secs`.
    pub fn new(start_secs: f64) -> Self {
        Self {
            secs: Arc::new(Mutex::new(start_secs)),
        }
    }

    /// Jump the clock to an absolute instant.
    pub fn set(&self, secs: f64) {
        *self.lock() = secs;
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance(&self, secs: f64) {
        *self.lock() += secs;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, f64> {
        // A poisoned clock lock is unreachable: no code path panics while
        // holding it.  Recover the value either way.
        self.secs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(*self.lock())
    }
}
