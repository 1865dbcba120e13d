//! Unit tests for rail-advisor.

use rail_core::{TrackId, TrainId};

use crate::{evaluate, ScenarioEvent};

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn delay_event_parses() {
        let event = ScenarioEvent::from_json(
            r#"{"event_type": "delay", "train_id": "T123", "delay_minutes": 15}"#,
        );
        assert_eq!(
            event,
            ScenarioEvent::Delay {
                train_id: TrainId::from("T123"),
                delay_minutes: 15
            }
        );
    }

    #[test]
    fn track_closure_event_parses() {
        let event = ScenarioEvent::from_json(
            r#"{"event_type": "track_closure", "track_id": 1, "duration_minutes": 45}"#,
        );
        assert_eq!(
            event,
            ScenarioEvent::TrackClosure {
                track_id: TrackId(1),
                duration_minutes: 45
            }
        );
    }

    #[test]
    fn new_train_event_parses() {
        let event = ScenarioEvent::from_json(
            r#"{"event_type": "new_train", "train_id": "T999", "track_id": 2}"#,
        );
        assert_eq!(
            event,
            ScenarioEvent::NewTrain {
                train_id: TrainId::from("T999"),
                track_id: TrackId(2)
            }
        );
    }

    #[test]
    fn unrecognised_event_type_is_unknown() {
        let event = ScenarioEvent::from_json(
            r#"{"event_type": "alien_invasion", "severity": "high"}"#,
        );
        assert_eq!(event, ScenarioEvent::Unknown);
    }

    #[test]
    fn malformed_input_coerces_to_unknown() {
        assert_eq!(ScenarioEvent::from_json("not json"), ScenarioEvent::Unknown);
        // A recognised tag with missing fields is still unparseable → Unknown.
        assert_eq!(
            ScenarioEvent::from_json(r#"{"event_type": "delay"}"#),
            ScenarioEvent::Unknown
        );
    }
}

#[cfg(test)]
mod advisory_tests {
    use super::*;

    #[test]
    fn delay_advisory_names_the_train() {
        let advisory = evaluate(&ScenarioEvent::Delay {
            train_id: TrainId::from("T123"),
            delay_minutes: 15,
        });
        assert!(advisory.scenario.contains("T123"));
        assert!(advisory.scenario.contains("15"));
        assert_eq!(advisory.plan.len(), 3);
        assert!(advisory.plan.iter().any(|step| step.contains("T123")));
    }

    #[test]
    fn closure_advisory_names_the_track() {
        let advisory = evaluate(&ScenarioEvent::TrackClosure {
            track_id: TrackId(1),
            duration_minutes: 45,
        });
        assert!(advisory.scenario.contains("Track 1"));
        assert!(advisory.scenario.contains("45"));
        assert_eq!(advisory.plan.len(), 3);
    }

    #[test]
    fn new_train_advisory_names_both_ids() {
        let advisory = evaluate(&ScenarioEvent::NewTrain {
            train_id: TrainId::from("T999"),
            track_id: TrackId(2),
        });
        assert!(advisory.scenario.contains("T999"));
        assert!(advisory.scenario.contains("track 2"));
        assert_eq!(advisory.plan.len(), 3);
    }

    #[test]
    fn unknown_advisory_is_generic_not_an_error() {
        let advisory = evaluate(&ScenarioEvent::Unknown);
        assert_eq!(advisory.scenario, "Unknown");
        assert!(advisory.plan.is_empty());
        assert!(!advisory.impact.is_empty());
    }

    #[test]
    fn advisory_serializes_as_the_transport_document() {
        let advisory = evaluate(&ScenarioEvent::Delay {
            train_id: TrainId::from("T1"),
            delay_minutes: 5,
        });
        let doc = serde_json::to_value(&advisory).unwrap();
        assert!(doc["scenario"].is_string());
        assert!(doc["plan"].is_array());
        assert!(doc["impact"].is_string());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let event = ScenarioEvent::TrackClosure {
            track_id: TrackId(0),
            duration_minutes: 10,
        };
        assert_eq!(evaluate(&event), evaluate(&event));
    }
}
