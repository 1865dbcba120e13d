//! The `Engine` — sole writer of the world state.

use rail_core::{Clock, SystemClock};
use rail_world::World;

use crate::{tick, SharedWorld, TickObserver};

/// Drives the tick cycle against a [`SharedWorld`].
///
/// The engine is the only component that mutates the world; everything else
/// reads through [`SharedWorld::snapshot`].  It is generic over [`Clock`] so
/// tests can step simulated wall-clock time by exact amounts with a
/// [`ManualClock`][rail_core::ManualClock].
///
/// Call [`tick`](Self::tick) / [`run_ticks`](Self::run_ticks) for manual
/// stepping, or [`spawn`](Self::spawn) to run on a background thread at a
/// fixed cadence.
pub struct Engine<C: Clock = SystemClock> {
    shared: SharedWorld,
    clock: C,
}

impl Engine<SystemClock> {
    /// An engine on the operating-system clock.
    pub fn new(world: World) -> Self {
        Self::with_clock(world, SystemClock)
    }
}

impl<C: Clock> Engine<C> {
    /// An engine on an explicit clock.
    pub fn with_clock(world: World, clock: C) -> Self {
        Self {
            shared: SharedWorld::new(world),
            clock,
        }
    }

    /// A reader handle onto this engine's world.
    pub fn shared(&self) -> SharedWorld {
        self.shared.clone()
    }

    /// Run one full tick cycle at the clock's current instant, holding the
    /// world lock throughout.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let mut world = self.shared.lock();
        tick::run(&mut world, now);
    }

    /// Run exactly `n` ticks, invoking `observer` around each.
    ///
    /// `on_tick_end` sees the world while the tick's lock is still held, so
    /// the observed state is exactly the tick's output.
    pub fn run_ticks<O: TickObserver>(&mut self, n: usize, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.now();
            observer.on_tick_start(now);
            let mut world = self.shared.lock();
            tick::run(&mut world, now);
            observer.on_tick_end(now, &world);
        }
    }
}
