//! CSV fleet-roster loader.
//!
//! # CSV format
//!
//! One row per train:
//!
//! ```csv
//! train_id,track,position,speed,priority
//! T123,0,10.0,80.0,1
//! T456,1,40.0,70.0,2
//! ```
//!
//! `speed` is in position units per hour; `priority` is ≥ 1, lower = more
//! important.  The loader only parses — range and reference validation
//! happens when the resulting [`TrainSpec`]s are fed through
//! [`World::from_config`][crate::World::from_config].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rail_core::{RailError, RailResult, TrackId, TrainId};

use crate::TrainSpec;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FleetRecord {
    train_id: String,
    track: u32,
    position: f64,
    speed: f64,
    priority: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fleet roster from a CSV file.
pub fn load_fleet_csv(path: &Path) -> RailResult<Vec<TrainSpec>> {
    let file = std::fs::File::open(path)?;
    load_fleet_reader(file)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for rosters embedded in
/// a binary.
pub fn load_fleet_reader<R: Read>(reader: R) -> RailResult<Vec<TrainSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();

    for result in csv_reader.deserialize::<FleetRecord>() {
        let row = result.map_err(|e| RailError::Parse(e.to_string()))?;
        specs.push(TrainSpec {
            id: TrainId::from(row.train_id),
            track: TrackId(row.track),
            position: row.position,
            speed: row.speed,
            priority: row.priority,
        });
    }

    Ok(specs)
}
