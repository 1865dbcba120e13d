//! Per-signal state.

use std::fmt;

use rail_core::TrackId;

/// Aspect of a signal.  Serialized as `"GREEN"` / `"RED"`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalState {
    #[default]
    Green,
    Red,
}

impl SignalState {
    #[inline]
    pub fn is_green(self) -> bool {
        matches!(self, SignalState::Green)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignalState::Green => "GREEN",
            SignalState::Red => "RED",
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One track-side signal.  Keyed by `SignalId` in the world's signal table.
///
/// The aspect is a pure function of the current tick: the engine defaults it
/// to red, re-derives it from block occupancy, and may override it during
/// junction arbitration.  It is never persisted intent.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Signal {
    /// The track the signal stands on.  Must exist in the `TrackRegistry`.
    pub track: TrackId,

    /// Track-local position of the signal.
    pub position: f64,

    /// Current aspect, rewritten every tick.
    pub state: SignalState,
}
