//! Templated advisory responses.

use serde::Serialize;

use crate::ScenarioEvent;

/// The advisor's structured answer: a restatement of the scenario, an
/// ordered response plan, and an impact estimate.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Advisory {
    pub scenario: String,
    pub plan: Vec<String>,
    pub impact: String,
}

/// Produce the templated advisory for `event`.  Pure function of its input.
pub fn evaluate(event: &ScenarioEvent) -> Advisory {
    match event {
        ScenarioEvent::Delay {
            train_id,
            delay_minutes,
        } => Advisory {
            scenario: format!("Train {train_id} is delayed by {delay_minutes} minutes."),
            plan: vec![
                "Adjust signal timings for services crossing its path.".to_owned(),
                format!("Hold lower-priority trains that conflict with {train_id}."),
                format!("Re-route {train_id} if its track becomes congested."),
            ],
            impact: "Minor cascading delays expected for two to three following services."
                .to_owned(),
        },

        ScenarioEvent::TrackClosure {
            track_id,
            duration_minutes,
        } => Advisory {
            scenario: format!("Track {track_id} is closed for {duration_minutes} minutes."),
            plan: vec![
                format!("Set every signal on track {track_id} to RED."),
                "Re-route approaching trains via the junctions.".to_owned(),
                "Hold trains already on the track at their nearest signal.".to_owned(),
            ],
            impact: "Significant delays expected on the closed track.".to_owned(),
        },

        ScenarioEvent::NewTrain { train_id, track_id } => Advisory {
            scenario: format!("Unscheduled train {train_id} added on track {track_id}."),
            plan: vec![
                "Scan current traffic for a safe insertion window.".to_owned(),
                format!("Adjust signals to open a gap for {train_id}."),
                "Shift the schedules of other services sharing the track.".to_owned(),
            ],
            impact: "Minimal impact while traffic stays light.".to_owned(),
        },

        ScenarioEvent::Unknown => Advisory {
            scenario: "Unknown".to_owned(),
            plan: vec![],
            impact: "Analysis in progress...".to_owned(),
        },
    }
}
