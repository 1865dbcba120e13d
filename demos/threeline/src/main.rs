//! threeline — smallest runnable railwatch deployment.
//!
//! Three parallel 100-unit tracks, two signals each, one junction where
//! tracks 0 and 1 cross, and a four-train fleet.  Runs the signalling engine
//! at its reference 1 s cadence for a few seconds, printing a state table
//! after each snapshot, then shuts down cleanly.

use std::io::Cursor;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rail_advisor::{evaluate, ScenarioEvent};
use rail_core::{Clock, SystemClock, Timestamp};
use rail_engine::Engine;
use rail_world::{load_fleet_reader, Snapshot, World, WorldConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICK_PERIOD: Duration = Duration::from_secs(1); // reference cadence
const RUN_SECONDS: u64 = 5;

// ── Layout & fleet ────────────────────────────────────────────────────────────

const LAYOUT_JSON: &str = r#"{
    "tracks": [
        {"id": 0, "length": 100.0},
        {"id": 1, "length": 100.0},
        {"id": 2, "length": 100.0}
    ],
    "signals": [
        {"id": "S1", "track": 0, "position": 25.0},
        {"id": "S2", "track": 0, "position": 75.0},
        {"id": "S3", "track": 1, "position": 25.0},
        {"id": "S4", "track": 1, "position": 75.0},
        {"id": "S5", "track": 2, "position": 25.0},
        {"id": "S6", "track": 2, "position": 75.0}
    ],
    "junctions": [
        {"id": "J1", "tracks": [0, 1], "position": 50.0, "controlled_by": ["S2", "S4"]}
    ],
    "kpis": {"punctuality": 99.1, "avg_delay": 1.2, "total_trains": 150, "delayed_trains": 5}
}"#;

// speed is in position units per hour; priority 1 is most important.
const FLEET_CSV: &str = "\
train_id,track,position,speed,priority\n\
T123,0,10,80,1\n\
T456,1,40,70,2\n\
T789,2,80,90,1\n\
T246,1,95,85,3\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Assemble the world: JSON layout plus the CSV fleet roster.
    let fleet = load_fleet_reader(Cursor::new(FLEET_CSV))?;
    let config = WorldConfig::from_json_str(LAYOUT_JSON)?.with_trains(fleet);
    let world = World::from_config(config, SystemClock.now())?;
    info!(
        tracks = world.registry.len(),
        trains = world.trains.len(),
        signals = world.signals.len(),
        junctions = world.junctions.len(),
        "world initialised"
    );

    // 2. Spawn the engine at the reference cadence.
    let handle = Engine::new(world).spawn(TICK_PERIOD);
    let reader = handle.shared();

    // 3. Watch it run: one snapshot per second, printing deltas of the log.
    let mut last_seen = Timestamp::ZERO;
    for second in 1..=RUN_SECONDS {
        thread::sleep(TICK_PERIOD);
        let snapshot = reader.snapshot(last_seen);
        println!("\n=== t+{second}s ===");
        print_table(&snapshot);
        for entry in snapshot.logs.iter().rev() {
            println!("  [{}] {}", entry.level, entry.message);
            if entry.timestamp > last_seen {
                last_seen = entry.timestamp;
            }
        }
    }

    // 4. A what-if query against the advisor (stateless — no world access).
    let advisory = evaluate(&ScenarioEvent::from_json(
        r#"{"event_type": "delay", "train_id": "T456", "delay_minutes": 15}"#,
    ));
    println!("\nAdvisor: {}", advisory.scenario);
    for (i, step) in advisory.plan.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    println!("  Impact: {}", advisory.impact);

    // 5. Deterministic shutdown.
    handle.stop();
    info!("engine stopped");
    Ok(())
}

fn print_table(snapshot: &Snapshot) {
    println!("{:<8} {:<6} {:>9} {:>7}  {}", "Train", "Track", "Position", "Prio", "Status");
    println!("{}", "-".repeat(56));
    for t in &snapshot.trains {
        println!(
            "{:<8} {:<6} {:>9.2} {:>7}  {}",
            t.id.as_str(),
            t.track.to_string(),
            t.position,
            t.priority,
            t.status
        );
    }
    let states: Vec<String> = snapshot
        .signals
        .iter()
        .map(|(id, s)| format!("{id}:{}", s.state))
        .collect();
    println!("Signals: {}", states.join("  "));
}
