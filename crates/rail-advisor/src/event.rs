//! Hypothetical event descriptions accepted by the advisor.

use serde::Deserialize;

use rail_core::{TrackId, TrainId};

/// A discriminated what-if event, tagged by `event_type` on the wire:
///
/// ```json
/// {"event_type": "delay", "train_id": "T123", "delay_minutes": 15}
/// {"event_type": "track_closure", "track_id": 1, "duration_minutes": 45}
/// {"event_type": "new_train", "train_id": "T999", "track_id": 2}
/// ```
///
/// Any unrecognised `event_type` deserializes to [`Unknown`](Self::Unknown).
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// A running train is delayed.
    Delay {
        train_id: TrainId,
        delay_minutes: u32,
    },

    /// A whole track is taken out of service.
    TrackClosure {
        track_id: TrackId,
        duration_minutes: u32,
    },

    /// An unscheduled train is inserted onto a track.
    NewTrain {
        train_id: TrainId,
        track_id: TrackId,
    },

    /// Anything the advisor does not recognise.
    #[serde(other)]
    Unknown,
}

impl ScenarioEvent {
    /// Parse an event from JSON, coercing anything unparseable to
    /// [`Unknown`](Self::Unknown).
    pub fn from_json(raw: &str) -> ScenarioEvent {
        serde_json::from_str(raw).unwrap_or(ScenarioEvent::Unknown)
    }
}
