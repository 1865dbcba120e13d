//! Workspace error type.
//!
//! Every variant here is a startup-time failure: the tick loop itself never
//! errors (anomalies during ticking become decision-log entries instead).
//! Sub-crates reuse `RailError` directly rather than defining their own
//! enums — the error surface is small enough that one type keeps call sites
//! uniform.

use thiserror::Error;

use crate::{SignalId, TrackId};

/// The top-level error type for all `rail-*` crates.
#[derive(Debug, Error)]
pub enum RailError {
    #[error("track {0} not found in the track registry")]
    TrackNotFound(TrackId),

    #[error("signal {0} not found")]
    SignalNotFound(SignalId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rail-*` crates.
pub type RailResult<T> = Result<T, RailError>;
