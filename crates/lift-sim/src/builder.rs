//! Builder for constructing a [`Simulation`].

use lift_core::{ElevatorId, Floor, RiderId, SimConfig};
use lift_scenario::Scenario;

use crate::{ActionQueue, Elevator, Rider, SimResult, Simulation};

/// Builds a fresh [`Simulation`] from a shared scenario and one candidate.
///
/// | Method       | Default                 |
/// |--------------|-------------------------|
/// | `.config(c)` | `SimConfig::default()`  |
///
/// ```rust,ignore
/// let sim = SimBuilder::new(&scenario, &candidate)
///     .config(SimConfig::default().with_max_ticks(1_000))
///     .build()?;
/// let result = sim.run()?;
/// ```
pub struct SimBuilder<'a> {
    scenario:  &'a Scenario,
    candidate: &'a [Floor],
    config:    SimConfig,
}

impl<'a> SimBuilder<'a> {
    pub fn new(scenario: &'a Scenario, candidate: &'a [Floor]) -> Self {
        Self { scenario, candidate, config: SimConfig::default() }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration and create riders, cars, and the action
    /// queue.  Nothing is shared with any other run except the scenario.
    pub fn build(self) -> SimResult<Simulation<'a>> {
        self.config.validate()?;

        let top_floor = self.scenario.top_floor();
        let elevators: Vec<Elevator> = self
            .scenario
            .cars()
            .iter()
            .enumerate()
            .map(|(i, spec)| Elevator::new(ElevatorId(i as u32), spec, top_floor, self.config.floor_tolerance))
            .collect();

        let riders: Vec<Rider> = (0..self.scenario.rider_count())
            .map(|i| Rider::new(RiderId(i as u32)))
            .collect();

        Ok(Simulation::from_parts(
            self.config,
            self.scenario.timeline(),
            riders,
            elevators,
            ActionQueue::new(self.candidate),
        ))
    }
}
