//! `rail-world` — the mutable world state of the railwatch signalling engine.
//!
//! The [`World`] aggregate owns every entity: the read-only [`TrackRegistry`],
//! the train and signal tables, the static junction table, the bounded
//! [`DecisionLog`], and the (static) [`KpiFigures`].  The engine crate is the
//! sole writer; external callers only ever see [`Snapshot`] copies.
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`registry`]  | `TrackRegistry` — track id → length, fixed at startup |
//! | [`train`]     | `Train`, `TrainStatus`                              |
//! | [`signal`]    | `Signal`, `SignalState`                             |
//! | [`junction`]  | `Junction`                                          |
//! | [`log`]       | `DecisionLog`, `LogEntry`, `Severity`               |
//! | [`kpi`]       | `KpiFigures`                                        |
//! | [`world`]     | `World` and its startup validation                  |
//! | [`snapshot`]  | `Snapshot`, `TrainView` — caller-owned state copies |
//! | [`config`]    | `WorldConfig` (JSON) and `World::from_config`       |
//! | [`fleet`]     | CSV fleet-roster loader                             |

pub mod config;
pub mod fleet;
pub mod junction;
pub mod kpi;
pub mod log;
pub mod registry;
pub mod signal;
pub mod snapshot;
pub mod train;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{JunctionSpec, SignalSpec, TrackSpec, TrainSpec, WorldConfig};
pub use fleet::{load_fleet_csv, load_fleet_reader};
pub use junction::Junction;
pub use kpi::KpiFigures;
pub use log::{DecisionLog, LogEntry, Severity, LOG_CAPACITY};
pub use registry::TrackRegistry;
pub use signal::{Signal, SignalState};
pub use snapshot::{Snapshot, TrainView};
pub use train::{Train, TrainStatus};
pub use world::World;
