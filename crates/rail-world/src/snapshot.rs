//! `Snapshot` — a consistent, caller-owned copy of world state.
//!
//! External callers never hold a live `World` reference; they receive one of
//! these.  The engine crate captures snapshots under the same mutex the tick
//! holds, so no partial tick is ever visible.

use std::collections::BTreeMap;

use rail_core::{SignalId, Timestamp, TrackId, TrainId};

use crate::{KpiFigures, LogEntry, Signal, TrainStatus, World};

/// One train as it appears in the read-state document: the full train state
/// tagged with its identifier.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TrainView {
    pub id: TrainId,
    pub track: TrackId,
    pub position: f64,
    pub speed: f64,
    pub status: TrainStatus,
    pub priority: u32,
    pub last_update: Timestamp,
}

/// The full read-state document: all trains (sorted by id), all signals
/// (keyed by id), log entries newer than the requested bound, and the KPI
/// figures.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Snapshot {
    pub trains: Vec<TrainView>,
    pub signals: BTreeMap<SignalId, Signal>,
    pub logs: Vec<LogEntry>,
    pub kpis: KpiFigures,
}

impl Snapshot {
    /// Copy the current state out of `world`.
    ///
    /// Trains and signals are always copied in full; only log entries with
    /// `timestamp > since` are included (pass [`Timestamp::ZERO`] for all).
    /// Never mutates.
    pub fn capture(world: &World, since: Timestamp) -> Snapshot {
        let trains = world
            .trains
            .iter()
            .map(|(id, train)| TrainView {
                id: id.clone(),
                track: train.track,
                position: train.position,
                speed: train.speed,
                status: train.status.clone(),
                priority: train.priority,
                last_update: train.last_update,
            })
            .collect();

        Snapshot {
            trains,
            signals: world.signals.clone(),
            logs: world.log.entries_since(since),
            kpis: world.kpis.clone(),
        }
    }

    /// Convenience lookup used by tests and demo tables.
    pub fn train(&self, id: &TrainId) -> Option<&TrainView> {
        self.trains.iter().find(|t| &t.id == id)
    }
}
