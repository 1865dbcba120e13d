//! Per-train state.

use std::fmt;

use rail_core::{SignalId, Timestamp, TrackId};

/// Descriptive running status of a train.
///
/// Serialized as the human-readable strings the operator dashboard expects:
/// `"On Time"` or `"Waiting at signal S1"`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum TrainStatus {
    /// Running clear; advanced normally on the last tick.
    #[default]
    OnTime,
    /// Held because the named signal is at danger within look-ahead range.
    WaitingAt(SignalId),
}

impl TrainStatus {
    /// `true` while the train is held at a signal.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        matches!(self, TrainStatus::WaitingAt(_))
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainStatus::OnTime => f.write_str("On Time"),
            TrainStatus::WaitingAt(signal) => write!(f, "Waiting at signal {signal}"),
        }
    }
}

impl serde::Serialize for TrainStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The mutable state of one train.  Keyed by `TrainId` in the world's train
/// table; created at startup and never deleted (trains loop indefinitely).
#[derive(Clone, Debug)]
pub struct Train {
    /// The track the train runs on.  Must exist in the `TrackRegistry`.
    pub track: TrackId,

    /// Track-local position.  `[0, track length]` at startup; the engine
    /// keeps it in `[0, track length)` after every tick (completion wraps
    /// to 0).
    pub position: f64,

    /// Speed in position units per hour.  Non-negative.
    pub speed: f64,

    /// Running status, rewritten every tick.
    pub status: TrainStatus,

    /// Arbitration priority — lower wins.  Always ≥ 1.
    pub priority: u32,

    /// Instant of the last engine update; elapsed time since this drives
    /// advancement.
    pub last_update: Timestamp,
}
