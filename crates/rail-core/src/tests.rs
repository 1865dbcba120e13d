//! Unit tests for rail-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SignalId, TrackId, TrainId};

    #[test]
    fn track_index_roundtrip() {
        let id = TrackId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(TrackId::from(2u32), id);
    }

    #[test]
    fn track_display_is_bare_number() {
        assert_eq!(TrackId(0).to_string(), "0");
        assert_eq!(format!("track {}", TrackId(1)), "track 1");
    }

    #[test]
    fn named_ids_order_lexically() {
        // The arbitration tie-break depends on this ordering.
        assert!(TrainId::from("T123") < TrainId::from("T456"));
        assert!(TrainId::from("T246") < TrainId::from("T456"));
        // Lexical, not numeric: "T9" sorts after "T10".
        assert!(TrainId::from("T10") < TrainId::from("T9"));
    }

    #[test]
    fn named_id_display_and_as_str() {
        let sig = SignalId::new("S4");
        assert_eq!(sig.to_string(), "S4");
        assert_eq!(sig.as_str(), "S4");
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, Timestamp};

    #[test]
    fn elapsed_arithmetic() {
        let t0 = Timestamp(1_000.0);
        let t1 = t0.offset_secs(3_600.0);
        assert_eq!(t1.seconds_since(t0), 3_600.0);
        assert_eq!(t1.hours_since(t0), 1.0);
        assert_eq!(t1 - t0, 3_600.0);
    }

    #[test]
    fn fractional_hours() {
        let t0 = Timestamp(0.0);
        let t1 = t0.offset_secs(1.0);
        // 1 s = 1/3600 h; a 360 units/hour train covers 0.1 units.
        assert!((360.0 * t1.hours_since(t0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn coerce_parses_well_formed_values() {
        assert_eq!(Timestamp::coerce_secs("12.5").0, 12.5);
        assert_eq!(Timestamp::coerce_secs(" 1700000000 ").0, 1_700_000_000.0);
    }

    #[test]
    fn coerce_degrades_malformed_to_zero() {
        assert_eq!(Timestamp::coerce_secs("").0, 0.0);
        assert_eq!(Timestamp::coerce_secs("not-a-number").0, 0.0);
        assert_eq!(Timestamp::coerce_secs("12.5x").0, 0.0);
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new(100.0);
        assert_eq!(clock.now(), Timestamp(100.0));
        clock.advance(2.5);
        assert_eq!(clock.now(), Timestamp(102.5));
        clock.set(0.0);
        assert_eq!(clock.now(), Timestamp::ZERO);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(0.0);
        let handle = clock.clone();
        handle.advance(7.0);
        assert_eq!(clock.now(), Timestamp(7.0));
    }
}

#[cfg(test)]
mod error {
    use crate::{RailError, TrackId};

    #[test]
    fn messages_name_the_offending_id() {
        let err = RailError::TrackNotFound(TrackId(3));
        assert!(err.to_string().contains('3'));
    }
}
