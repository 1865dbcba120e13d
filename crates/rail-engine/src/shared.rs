//! `SharedWorld` — the synchronization boundary around the world state.
//!
//! One `Mutex` guards all reads and writes.  The engine holds it for the full
//! duration of a tick (the three phases must be observed atomically); readers
//! hold it only long enough to copy a [`Snapshot`] out.  The public read API
//! is snapshot-only, so no caller can retain a live reference into the world.

use std::sync::{Arc, Mutex, MutexGuard};

use rail_core::Timestamp;
use rail_world::{Snapshot, World};

/// Cloneable handle to the mutex-guarded world.
///
/// Clones share the same world; hand them to any number of reader threads.
#[derive(Clone)]
pub struct SharedWorld {
    inner: Arc<Mutex<World>>,
}

impl SharedWorld {
    pub(crate) fn new(world: World) -> Self {
        Self {
            inner: Arc::new(Mutex::new(world)),
        }
    }

    /// Copy the current state out, atomically with respect to the tick.
    ///
    /// `since` bounds the log entries (strictly newer); pass
    /// [`Timestamp::ZERO`] for all of them.
    pub fn snapshot(&self, since: Timestamp) -> Snapshot {
        Snapshot::capture(&self.lock(), since)
    }

    /// Lock the world.  A poisoned lock means a tick panicked mid-update,
    /// after which the state cannot be trusted; the process is considered
    /// failed.
    pub(crate) fn lock(&self) -> MutexGuard<'_, World> {
        self.inner
            .lock()
            .expect("engine panicked while holding the world lock")
    }
}
