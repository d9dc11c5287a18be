//! The `Simulation` struct and its tick loop.

use lift_core::{SimConfig, Tick};
use lift_scenario::ScheduledRequest;

use crate::fitness::fitness;
use crate::{ActionQueue, Elevator, NoopObserver, Outcome, Rider, RiderStep, RunResult, SimObserver, SimResult};

/// State of one fitness evaluation.
///
/// Created by [`SimBuilder`][crate::SimBuilder] and consumed by
/// [`run`][Self::run].  Riders are stepped in ascending `RiderId` order and
/// cars in fastest-first order; both orders are fixed for the whole run, so a
/// given scenario and candidate always produce the same result.
pub struct Simulation<'a> {
    config:    SimConfig,
    tick:      Tick,
    /// Requests in release order; `released` is the cursor into it.
    timeline:  &'a [ScheduledRequest],
    released:  usize,
    riders:    Vec<Rider>,
    elevators: Vec<Elevator>,
    actions:   ActionQueue<'a>,
    /// Released destinations not yet delivered.
    pending:   usize,
    complete:  bool,
}

impl<'a> Simulation<'a> {
    pub(crate) fn from_parts(
        config:    SimConfig,
        timeline:  &'a [ScheduledRequest],
        riders:    Vec<Rider>,
        elevators: Vec<Elevator>,
        actions:   ActionQueue<'a>,
    ) -> Self {
        Self {
            config,
            tick: Tick::ZERO,
            timeline,
            released: 0,
            riders,
            elevators,
            actions,
            pending: 0,
            complete: false,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run to completion or timeout without callbacks.
    pub fn run(self) -> SimResult<RunResult> {
        self.run_observed(&mut NoopObserver)
    }

    /// Run to completion or timeout, reporting every event to `observer`.
    pub fn run_observed<O: SimObserver>(mut self, observer: &mut O) -> SimResult<RunResult> {
        while !self.complete && self.tick < self.config.end_tick() {
            self.step(observer)?;
        }
        let result = self.result();
        match result.outcome {
            Outcome::Completed => log::debug!(
                "run completed at {} using {} actions (fitness {:.6})",
                result.final_tick, result.used_actions, result.fitness
            ),
            Outcome::TimedOut => log::debug!(
                "run timed out at {} with {} unfulfilled (fitness {:.9})",
                result.final_tick, result.unfulfilled, result.fitness
            ),
        }
        observer.on_sim_end(&result);
        Ok(result)
    }

    /// Process one tick.  A no-op once the run is complete.
    ///
    /// Completion is detected right after the rider phase.  The cars still
    /// take their step in that tick, but the tick counter is left on the
    /// tick in which the last rider alighted.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.complete {
            return Ok(());
        }
        let now = self.tick;
        observer.on_tick_start(now);

        self.release(now, observer);
        self.step_riders(now, observer);
        let done = self.released == self.timeline.len() && self.pending == 0;

        self.step_elevators(now, observer)?;
        observer.on_tick_end(now, self.pending);

        if done {
            self.complete = true;
        } else {
            self.tick = now.next();
        }
        Ok(())
    }

    /// Summarise the run in its current state.
    pub fn result(&self) -> RunResult {
        let unfulfilled: usize = self.riders.iter().map(Rider::pending).sum();
        debug_assert_eq!(unfulfilled, self.pending);
        RunResult {
            outcome:      if self.complete { Outcome::Completed } else { Outcome::TimedOut },
            final_tick:   self.tick,
            unfulfilled,
            fitness:      fitness(self.tick, unfulfilled, &self.config),
            used_actions: self.actions.consumed(),
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn riders(&self) -> &[Rider] {
        &self.riders
    }

    /// Cars in fastest-first order.
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Targets left in the shared action queue.
    pub fn pending_actions(&self) -> usize {
        self.actions.remaining()
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// ① Queue every request scheduled for `now`.
    fn release<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let timeline = self.timeline;
        while let Some(next) = timeline.get(self.released) {
            if next.request.time != now {
                break;
            }
            self.riders[next.rider.index()].push_destination(next.request.to);
            self.pending += 1;
            self.released += 1;
            observer.on_release(now, next.rider, next.request.to);
        }
    }

    /// ② Boarding and alighting, ascending `RiderId`.
    fn step_riders<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for rider in &mut self.riders {
            match rider.tick(&mut self.elevators) {
                RiderStep::Waited => {}
                RiderStep::Boarded { car, floor } => {
                    log::trace!("{now}: {} boards {car} at floor {floor}", rider.id());
                    observer.on_board(now, rider.id(), car, floor);
                }
                RiderStep::Alighted { car, floor } => {
                    log::trace!("{now}: {} leaves {car} at floor {floor}", rider.id());
                    self.pending -= 1;
                    observer.on_alight(now, rider.id(), car, floor);
                }
            }
        }
    }

    /// ③ Dispatch and movement, fastest car first.
    fn step_elevators<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        for car in &mut self.elevators {
            if let Some(target) = car.tick(now, &mut self.actions, &mut self.riders)? {
                log::trace!("{now}: {} dispatched to floor {target}", car.id());
                observer.on_dispatch(now, car.id(), target);
            }
        }
        Ok(())
    }
}
