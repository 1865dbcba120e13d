//! JSON world configuration.
//!
//! # Format
//!
//! ```json
//! {
//!   "tracks":    [ {"id": 0, "length": 100.0} ],
//!   "signals":   [ {"id": "S1", "track": 0, "position": 25.0} ],
//!   "junctions": [ {"id": "J1", "tracks": [0, 1], "position": 50.0,
//!                   "controlled_by": ["S2", "S4"]} ],
//!   "trains":    [ {"id": "T123", "track": 0, "position": 10.0,
//!                   "speed": 80.0, "priority": 1} ],
//!   "kpis":      {"punctuality": 99.1, "avg_delay": 1.2,
//!                 "total_trains": 150, "delayed_trains": 5}
//! }
//! ```
//!
//! Signal `state` defaults to `"GREEN"` and is recomputed on the first tick
//! anyway.  `trains`, `signals`, `junctions`, and `kpis` may be omitted.
//! Trains may also come from a CSV roster (see [`crate::fleet`]) merged in
//! via [`WorldConfig::with_trains`].

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rail_core::{JunctionId, RailError, RailResult, SignalId, Timestamp, TrackId, TrainId};

use crate::{
    Junction, KpiFigures, Signal, SignalState, TrackRegistry, Train, TrainStatus, World,
};

// ── Config records ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Deserialize)]
pub struct TrackSpec {
    pub id: TrackId,
    pub length: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SignalSpec {
    pub id: SignalId,
    pub track: TrackId,
    pub position: f64,
    #[serde(default)]
    pub state: SignalState,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JunctionSpec {
    pub id: JunctionId,
    pub tracks: Vec<TrackId>,
    pub position: f64,
    pub controlled_by: Vec<SignalId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TrainSpec {
    pub id: TrainId,
    pub track: TrackId,
    pub position: f64,
    pub speed: f64,
    pub priority: u32,
}

/// The startup configuration: everything the world is built from.
#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    pub tracks: Vec<TrackSpec>,
    #[serde(default)]
    pub trains: Vec<TrainSpec>,
    #[serde(default)]
    pub signals: Vec<SignalSpec>,
    #[serde(default)]
    pub junctions: Vec<JunctionSpec>,
    #[serde(default)]
    pub kpis: KpiFigures,
}

impl WorldConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> RailResult<Self> {
        serde_json::from_str(raw).map_err(|e| RailError::Parse(e.to_string()))
    }

    /// Parse a configuration from any `Read` source.
    pub fn from_json_reader<R: Read>(reader: R) -> RailResult<Self> {
        serde_json::from_reader(reader).map_err(|e| RailError::Parse(e.to_string()))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> RailResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Append trains (e.g. from a CSV fleet roster) to the configuration.
    pub fn with_trains(mut self, trains: impl IntoIterator<Item = TrainSpec>) -> Self {
        self.trains.extend(trains);
        self
    }
}

// ── World construction ────────────────────────────────────────────────────────

impl World {
    /// Build and validate a world from `config`, stamping initial train
    /// updates and the startup log entry with `now`.
    ///
    /// # Errors
    ///
    /// Any duplicate identifier or dangling reference is a fatal
    /// configuration error — detected here, at startup, never mid-tick.
    pub fn from_config(config: WorldConfig, now: Timestamp) -> RailResult<World> {
        let registry =
            TrackRegistry::from_lengths(config.tracks.iter().map(|t| (t.id, t.length)))?;

        let mut signals = BTreeMap::new();
        for spec in config.signals {
            let signal = Signal {
                track: spec.track,
                position: spec.position,
                state: spec.state,
            };
            if signals.insert(spec.id.clone(), signal).is_some() {
                return Err(RailError::Config(format!("duplicate signal id {}", spec.id)));
            }
        }

        let mut trains = BTreeMap::new();
        for spec in config.trains {
            let train = Train {
                track: spec.track,
                position: spec.position,
                speed: spec.speed,
                status: TrainStatus::OnTime,
                priority: spec.priority,
                last_update: now,
            };
            if trains.insert(spec.id.clone(), train).is_some() {
                return Err(RailError::Config(format!("duplicate train id {}", spec.id)));
            }
        }

        let mut junctions = BTreeMap::new();
        for spec in config.junctions {
            let junction = Junction {
                tracks: spec.tracks,
                position: spec.position,
                controlled_by: spec.controlled_by,
            };
            if junctions.insert(spec.id.clone(), junction).is_some() {
                return Err(RailError::Config(format!(
                    "duplicate junction id {}",
                    spec.id
                )));
            }
        }

        World::new(registry, trains, signals, junctions, config.kpis, now)
    }
}
