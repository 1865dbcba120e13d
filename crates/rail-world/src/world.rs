//! The `World` aggregate and its startup validation.

use std::collections::BTreeMap;

use rail_core::{JunctionId, RailError, RailResult, SignalId, Timestamp, TrainId};

use crate::{DecisionLog, Junction, KpiFigures, Severity, Signal, TrackRegistry, Train};

/// All mutable world state, owned as one unit.
///
/// Fields are `pub` for direct access inside the workspace; the engine crate
/// wraps the world in a mutex-guarded handle so nothing outside the engine
/// ever holds a live reference.  `BTreeMap` tables give deterministic
/// ascending-id iteration, which the tick cycle relies on wherever "first
/// match" matters.
#[derive(Clone, Debug)]
pub struct World {
    /// Track id → length.  Read-only after startup.
    pub registry: TrackRegistry,

    /// All trains, keyed by id.  Mutated every tick; never removed.
    pub trains: BTreeMap<TrainId, Train>,

    /// All signals, keyed by id.  Aspects rewritten every tick.
    pub signals: BTreeMap<SignalId, Signal>,

    /// All junctions, keyed by id.  Static after startup.
    pub junctions: BTreeMap<JunctionId, Junction>,

    /// Bounded decision log, newest first.
    pub log: DecisionLog,

    /// Static dashboard figures, echoed into every snapshot.
    pub kpis: KpiFigures,
}

impl World {
    /// Assemble and validate a world.
    ///
    /// Every cross-reference is checked here, at startup, so the tick cycle
    /// never has to handle a dangling reference:
    ///
    /// - each signal's track must exist in the registry;
    /// - each train's track must exist, its position must lie within
    ///   `[0, track length]`, its speed must be finite and non-negative, and
    ///   its priority must be ≥ 1;
    /// - each junction's tracks must exist and each of its gating signals
    ///   must be in the signal table.
    ///
    /// On success the decision log carries a single startup entry stamped
    /// `now`.
    pub fn new(
        registry: TrackRegistry,
        trains: BTreeMap<TrainId, Train>,
        signals: BTreeMap<SignalId, Signal>,
        junctions: BTreeMap<JunctionId, Junction>,
        kpis: KpiFigures,
        now: Timestamp,
    ) -> RailResult<Self> {
        for signal in signals.values() {
            if !registry.contains(signal.track) {
                return Err(RailError::TrackNotFound(signal.track));
            }
        }

        for (id, train) in &trains {
            let Some(length) = registry.get(train.track) else {
                return Err(RailError::TrackNotFound(train.track));
            };
            if !(0.0..=length).contains(&train.position) {
                return Err(RailError::Config(format!(
                    "train {id}: position {} outside track 0..={length}",
                    train.position
                )));
            }
            if !train.speed.is_finite() || train.speed < 0.0 {
                return Err(RailError::Config(format!(
                    "train {id}: invalid speed {}",
                    train.speed
                )));
            }
            if train.priority == 0 {
                return Err(RailError::Config(format!(
                    "train {id}: priority must be ≥ 1"
                )));
            }
        }

        for junction in junctions.values() {
            for &track in &junction.tracks {
                if !registry.contains(track) {
                    return Err(RailError::TrackNotFound(track));
                }
            }
            for signal in &junction.controlled_by {
                if !signals.contains_key(signal) {
                    return Err(RailError::SignalNotFound(signal.clone()));
                }
            }
        }

        let mut log = DecisionLog::new();
        log.record(
            now,
            Severity::Info,
            "World initialised; signalling engine active.",
        );

        Ok(Self {
            registry,
            trains,
            signals,
            junctions,
            log,
            kpis,
        })
    }
}
