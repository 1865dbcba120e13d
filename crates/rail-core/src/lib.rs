//! `rail-core` — foundational types for the railwatch signalling engine.
//!
//! This crate is a dependency of every other `rail-*` crate.  It intentionally
//! has no `rail-*` dependencies and minimal external ones (only `serde` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `TrackId`, `TrainId`, `SignalId`, `JunctionId`        |
//! | [`time`]    | `Timestamp`, `Clock`, `SystemClock`, `ManualClock`    |
//! | [`error`]   | `RailError`, `RailResult`                             |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RailError, RailResult};
pub use ids::{JunctionId, SignalId, TrackId, TrainId};
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
