//! The three tick phases.
//!
//! All three run under one lock hold in strict order — phase ③ overrides
//! phase ② for signals near a contested junction, so the phases of a single
//! tick must be observed atomically.

use std::collections::BTreeSet;

use tracing::{info, warn};

use rail_core::{Timestamp, TrackId};
use rail_world::{Severity, SignalState, TrainStatus, World};

/// A train is held when the nearest forward signal within this distance is
/// not green.
pub(crate) const SIGNAL_LOOKAHEAD: f64 = 5.0;

/// Length of the exclusive block ahead of each signal.  A train anywhere in
/// `[signal.position, signal.position + BLOCK_LENGTH)` keeps the signal red.
pub(crate) const BLOCK_LENGTH: f64 = 20.0;

/// Trains within this distance of a junction's position contend for it, and
/// signals within the same distance are subject to the arbitration override.
pub(crate) const JUNCTION_RADIUS: f64 = 25.0;

/// Run one full tick at `now`.  Pure in-memory arithmetic; never fails.
pub(crate) fn run(world: &mut World, now: Timestamp) {
    advance_trains(world, now);
    recompute_signals(world, now);
    resolve_junctions(world, now);
}

// ── Phase ①: train advancement ────────────────────────────────────────────────

fn advance_trains(world: &mut World, now: Timestamp) {
    let World {
        registry,
        trains,
        signals,
        log,
        ..
    } = world;

    for (id, train) in trains.iter_mut() {
        let elapsed_hours = now.hours_since(train.last_update);

        // Only the nearest signal strictly ahead matters; a danger aspect
        // further up the track is the next block's problem.
        let nearest_ahead = signals
            .iter()
            .filter(|(_, s)| s.track == train.track && s.position > train.position)
            .min_by(|a, b| a.1.position.total_cmp(&b.1.position));
        let blocking = nearest_ahead.filter(|(_, s)| {
            s.position - train.position < SIGNAL_LOOKAHEAD && !s.state.is_green()
        });

        match blocking {
            Some((signal_id, _)) => {
                train.status = TrainStatus::WaitingAt(signal_id.clone());
            }
            None => {
                train.position += train.speed * elapsed_hours;
                train.status = TrainStatus::OnTime;
            }
        }
        train.last_update = now;

        if train.position >= registry.length(train.track) {
            info!(train = %id, track = %train.track, "circuit completed, wrapping to origin");
            log.record(
                now,
                Severity::Info,
                format!(
                    "Train {id} completed a circuit of track {}; re-entering at the origin.",
                    train.track
                ),
            );
            train.position = 0.0;
        }
    }
}

// ── Phase ②: signal recomputation ─────────────────────────────────────────────

fn recompute_signals(world: &mut World, now: Timestamp) {
    let World {
        trains,
        signals,
        log,
        ..
    } = world;

    for signal in signals.values_mut() {
        signal.state = SignalState::Red;
    }

    for (signal_id, signal) in signals.iter_mut() {
        let occupant = trains.iter().find(|(_, t)| {
            t.track == signal.track
                && t.position >= signal.position
                && t.position < signal.position + BLOCK_LENGTH
        });
        match occupant {
            Some((train_id, _)) => {
                log.record(
                    now,
                    Severity::Action,
                    format!(
                        "Block ahead of signal {signal_id} occupied by train {train_id}; holding RED."
                    ),
                );
            }
            None => signal.state = SignalState::Green,
        }
    }
}

// ── Phase ③: junction conflict resolution ─────────────────────────────────────

fn resolve_junctions(world: &mut World, now: Timestamp) {
    let World {
        trains,
        signals,
        junctions,
        log,
        ..
    } = world;

    for (junction_id, junction) in junctions.iter() {
        let mut contenders: Vec<_> = trains
            .iter()
            .filter(|(_, t)| {
                junction.spans(t.track)
                    && (t.position - junction.position).abs() < JUNCTION_RADIUS
            })
            .collect();
        if contenders.len() < 2 {
            continue;
        }

        // Total order: priority first, then lexical train id.  Uniqueness of
        // ids makes the arbitration decidable for any contender set.
        contenders.sort_by(|a, b| a.1.priority.cmp(&b.1.priority).then_with(|| a.0.cmp(b.0)));
        let (winner_id, winner) = contenders[0];

        warn!(
            junction = %junction_id,
            winner = %winner_id,
            contenders = contenders.len(),
            "junction conflict arbitrated"
        );
        log.record(
            now,
            Severity::Warning,
            format!("Conflict near junction {junction_id}; prioritising train {winner_id}."),
        );

        let contended_tracks: BTreeSet<TrackId> =
            contenders.iter().map(|(_, t)| t.track).collect();

        for (signal_id, signal) in signals.iter_mut() {
            if !contended_tracks.contains(&signal.track)
                || (signal.position - junction.position).abs() >= JUNCTION_RADIUS
            {
                continue;
            }
            if signal.track == winner.track {
                signal.state = SignalState::Green;
            } else {
                signal.state = SignalState::Red;
                log.record(
                    now,
                    Severity::Action,
                    format!(
                        "Holding signal {signal_id} at RED while train {winner_id} clears junction {junction_id}."
                    ),
                );
            }
        }
    }
}
