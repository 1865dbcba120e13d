//! Background runner — fixed cadence, explicit shutdown.
//!
//! The engine runs on one dedicated thread.  Each iteration waits on a stop
//! channel with a timeout of one period: a timeout means "tick now", a
//! message (or a dropped sender) means "shut down".  If a tick's own work
//! exceeds the period, ticks simply serialize — two ticks never run
//! concurrently, because there is only the one thread and it holds the world
//! lock for the full cycle.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, error};

use rail_core::{Clock, Timestamp};
use rail_world::Snapshot;

use crate::{Engine, SharedWorld};

impl<C: Clock + Send + 'static> Engine<C> {
    /// Move the engine onto a background thread ticking every `period`.
    ///
    /// The returned [`EngineHandle`] is the only way to stop the loop; keep
    /// it for the lifetime of the deployment.
    pub fn spawn(self, period: Duration) -> EngineHandle {
        let shared = self.shared();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let thread = thread::Builder::new()
            .name("rail-engine".into())
            .spawn(move || {
                let mut engine = self;
                debug!(period_ms = period.as_millis() as u64, "engine loop started");
                loop {
                    match stop_rx.recv_timeout(period) {
                        Err(RecvTimeoutError::Timeout) => engine.tick(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("engine loop stopped");
            })
            .expect("failed to spawn the engine thread");

        EngineHandle {
            shared,
            stop: stop_tx,
            thread,
        }
    }
}

/// Owner's handle to a spawned engine: reader access plus shutdown.
pub struct EngineHandle {
    shared: SharedWorld,
    stop: mpsc::Sender<()>,
    thread: thread::JoinHandle<()>,
}

impl EngineHandle {
    /// A reader handle onto the running engine's world.
    pub fn shared(&self) -> SharedWorld {
        self.shared.clone()
    }

    /// Snapshot the current state (see [`SharedWorld::snapshot`]).
    pub fn snapshot(&self, since: Timestamp) -> Snapshot {
        self.shared.snapshot(since)
    }

    /// Signal the loop to stop and wait for the thread to exit.
    ///
    /// Deterministic: the loop observes the message at its next wait, which
    /// it is already in unless a tick is in flight.
    pub fn stop(self) {
        // A failed send means the thread already exited, which is fine.
        let _ = self.stop.send(());
        if self.thread.join().is_err() {
            error!("engine thread panicked before shutdown");
        }
    }
}
