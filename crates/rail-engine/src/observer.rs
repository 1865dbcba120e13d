//! Tick observer trait for instrumentation and demos.

use rail_core::Timestamp;
use rail_world::World;

/// Callbacks invoked by [`Engine::run_ticks`][crate::Engine::run_ticks]
/// around each tick.
///
/// Both methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — conflict counter
///
/// ```rust,ignore
/// struct ConflictCounter(usize);
///
/// impl TickObserver for ConflictCounter {
///     fn on_tick_end(&mut self, _now: Timestamp, world: &World) {
///         if world.log.latest().is_some_and(|e| e.level == Severity::Warning) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait TickObserver {
    /// Called before the tick runs, outside the world lock.
    fn on_tick_start(&mut self, _now: Timestamp) {}

    /// Called after the tick's phases complete, while its lock is still
    /// held — `world` is exactly the tick's output.
    fn on_tick_end(&mut self, _now: Timestamp, _world: &World) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
