//! Simulation observer trait for tracing and data collection.

use lift_core::{ElevatorId, Floor, RiderId, Tick};

use crate::RunResult;

/// Callbacks invoked by [`Simulation`][crate::Simulation] at key points of
/// each tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Scoring runs use [`NoopObserver`].
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A scheduled request joined `rider`'s destination queue.
    fn on_release(&mut self, _tick: Tick, _rider: RiderId, _destination: Floor) {}

    fn on_board(&mut self, _tick: Tick, _rider: RiderId, _car: ElevatorId, _floor: Floor) {}

    fn on_alight(&mut self, _tick: Tick, _rider: RiderId, _car: ElevatorId, _floor: Floor) {}

    /// `car` took `target` from the shared action queue.
    fn on_dispatch(&mut self, _tick: Tick, _car: ElevatorId, _target: Floor) {}

    /// Called at the end of each tick.  `pending` is the number of released
    /// but undelivered destinations.
    fn on_tick_end(&mut self, _tick: Tick, _pending: usize) {}

    /// Called once with the run's summary.
    fn on_sim_end(&mut self, _result: &RunResult) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
