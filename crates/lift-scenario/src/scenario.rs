//! `Scenario` and its builder.

use std::collections::HashMap;

use lift_core::{ElevatorId, Floor, RiderId, Tick};

use crate::{CarSpec, Request, ScenarioError, ScenarioResult, ScheduledRequest};

/// A fully validated, read-only elevator bank plus request timeline.
///
/// Invariants established by [`ScenarioBuilder::build`]:
///
/// - `cars` is ordered fastest first (stable: equal speeds keep input order);
///   a car's position in this list is its [`ElevatorId`].
/// - `timeline` is stable-sorted by request time.
/// - `top_floor` is the highest from/to floor of any request, and every car
///   starts within `[1, top_floor]`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    cars:        Vec<CarSpec>,
    top_floor:   Floor,
    rider_names: Vec<String>,
    timeline:    Vec<ScheduledRequest>,
}

impl Scenario {
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::new()
    }

    /// Cars in fastest-first order.
    pub fn cars(&self) -> &[CarSpec] {
        &self.cars
    }

    /// `None` if `id` is out of range.
    pub fn car(&self, id: ElevatorId) -> Option<&CarSpec> {
        self.cars.get(id.index())
    }

    pub fn top_floor(&self) -> Floor {
        self.top_floor
    }

    /// Scenario labels of all riders, indexed by [`RiderId`].
    pub fn rider_names(&self) -> &[String] {
        &self.rider_names
    }

    pub fn rider_name(&self, id: RiderId) -> Option<&str> {
        self.rider_names.get(id.index()).map(String::as_str)
    }

    pub fn rider_count(&self) -> usize {
        self.rider_names.len()
    }

    /// Requests in release order.
    pub fn timeline(&self) -> &[ScheduledRequest] {
        &self.timeline
    }

    pub fn request_count(&self) -> usize {
        self.timeline.len()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`Scenario`].
///
/// ```rust,ignore
/// let scenario = Scenario::builder()
///     .car("C1", 12, 0.5, 1)
///     .request("alice", 0, 1, 7)
///     .build()?;
/// ```
#[derive(Default)]
pub struct ScenarioBuilder {
    cars:     Vec<CarSpec>,
    requests: Vec<(String, Request)>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn car(mut self, name: impl Into<String>, capacity: u32, speed: f64, start_floor: Floor) -> Self {
        self.push_car(CarSpec { name: name.into(), capacity, speed, start_floor });
        self
    }

    pub fn request(mut self, rider: impl Into<String>, time: u64, from: Floor, to: Floor) -> Self {
        self.push_request(rider, Request { time: Tick(time), from, to });
        self
    }

    pub fn push_car(&mut self, car: CarSpec) {
        self.cars.push(car);
    }

    pub fn push_request(&mut self, rider: impl Into<String>, request: Request) {
        self.requests.push((rider.into(), request));
    }

    /// Validate, sort, and freeze the scenario.
    pub fn build(self) -> ScenarioResult<Scenario> {
        if self.cars.is_empty() {
            return Err(ScenarioError::Invalid("scenario has no elevator cars".into()));
        }
        if self.requests.is_empty() {
            return Err(ScenarioError::Invalid("scenario has no requests".into()));
        }

        for car in &self.cars {
            if !(car.speed.is_finite() && car.speed > 0.0) {
                return Err(ScenarioError::Invalid(format!(
                    "car {:?} has non-positive speed {}",
                    car.name, car.speed
                )));
            }
        }

        for (rider, req) in &self.requests {
            if req.from < 1 || req.to < 1 {
                return Err(ScenarioError::Invalid(format!(
                    "request for rider {rider:?} at {} references a floor below 1",
                    req.time
                )));
            }
        }

        let top_floor = self
            .requests
            .iter()
            .map(|(_, r)| r.from.max(r.to))
            .max()
            .unwrap_or(1);

        for car in &self.cars {
            if car.start_floor < 1 || car.start_floor > top_floor {
                return Err(ScenarioError::Invalid(format!(
                    "car {:?} starts at floor {} outside [1, {top_floor}]",
                    car.name, car.start_floor
                )));
            }
        }

        // Stable sorts: ties keep the order they were supplied in.
        let mut cars = self.cars;
        cars.sort_by(|a, b| b.speed.total_cmp(&a.speed));

        let mut ids: HashMap<String, RiderId> = HashMap::new();
        let mut rider_names: Vec<String> = Vec::new();
        let mut timeline: Vec<ScheduledRequest> = Vec::with_capacity(self.requests.len());
        for (name, request) in self.requests {
            let rider = match ids.get(&name) {
                Some(&id) => id,
                None => {
                    let id = RiderId::try_from(rider_names.len())
                        .map_err(|_| ScenarioError::Invalid("too many riders".into()))?;
                    ids.insert(name.clone(), id);
                    rider_names.push(name);
                    id
                }
            };
            timeline.push(ScheduledRequest { rider, request });
        }
        timeline.sort_by_key(|r| r.request.time);

        log::debug!(
            "scenario: {} cars, {} riders, {} requests, top floor {top_floor}",
            cars.len(),
            rider_names.len(),
            timeline.len()
        );

        Ok(Scenario { cars, top_floor, rider_names, timeline })
    }
}
