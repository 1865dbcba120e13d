//! `rail-engine` — the tick cycle and its runner.
//!
//! # Three-phase tick cycle
//!
//! ```text
//! every period (default 1 s), under one lock hold:
//!   ① Advance   — each train moves speed × elapsed_hours, unless its nearest
//!                 forward signal is at danger within look-ahead range;
//!                 completions wrap to the track origin.
//!   ② Signals   — every signal defaults to RED, then goes GREEN iff no train
//!                 occupies the block [position, position + 20).
//!   ③ Junctions — ≥ 2 trains within 25 units of a junction is a conflict:
//!                 lowest (priority, id) wins; nearby signals are forced GREEN
//!                 on the winner's track and RED on every other contender's.
//! ```
//!
//! Phase ③ overrides phase ② for the affected signals only, which is why the
//! whole cycle runs atomically under the world lock.  The tick never fails;
//! everything it decides is recorded in the world's decision log.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use rail_engine::Engine;
//! use rail_world::{World, WorldConfig};
//!
//! let world = World::from_config(config, rail_core::SystemClock.now())?;
//! let handle = Engine::new(world).spawn(Duration::from_secs(1));
//! let reader = handle.shared();            // snapshot-only view for readers
//! // ...
//! let snapshot = reader.snapshot(rail_core::Timestamp::ZERO);
//! handle.stop();                           // deterministic shutdown
//! ```

pub mod engine;
pub mod observer;
pub mod runner;
pub mod shared;
mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::Engine;
pub use observer::{NoopObserver, TickObserver};
pub use runner::EngineHandle;
pub use shared::SharedWorld;
