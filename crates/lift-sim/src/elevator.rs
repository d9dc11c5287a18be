//! Per-car state machine.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorId, Floor, RiderId, Tick, quantize};
use lift_scenario::CarSpec;

use crate::{ActionQueue, Rider, SimError, SimResult};

/// One elevator car.
///
/// Position is fractional: the car is *at a floor* only when the position
/// quantizes to an integer (see [`lift_core::quantize`]), otherwise it is in
/// transit and [`floor`][Self::floor] returns `None`.
///
/// Occupants are kept in a `BTreeSet` so floor-change notifications go out
/// in ascending `RiderId` order.
#[derive(Clone, Debug)]
pub struct Elevator {
    id:        ElevatorId,
    capacity:  usize,
    speed:     f64,
    top_floor: Floor,
    tolerance: f64,
    position:  f64,
    direction: Direction,
    target:    Floor,
    occupants: BTreeSet<RiderId>,
}

impl Elevator {
    /// An idle car parked at `spec.start_floor`, targeting that same floor.
    pub fn new(id: ElevatorId, spec: &CarSpec, top_floor: Floor, tolerance: f64) -> Self {
        Self {
            id,
            capacity:  spec.capacity as usize,
            speed:     spec.speed,
            top_floor,
            tolerance,
            position:  spec.start_floor as f64,
            direction: Direction::Idle,
            target:    spec.start_floor,
            occupants: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target(&self) -> Floor {
        self.target
    }

    /// Discrete floor, or `None` while between floors.
    #[inline]
    pub fn floor(&self) -> Option<Floor> {
        quantize(self.position, self.tolerance)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.capacity
    }

    pub fn occupants(&self) -> impl Iterator<Item = RiderId> + '_ {
        self.occupants.iter().copied()
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn carries(&self, rider: RiderId) -> bool {
        self.occupants.contains(&rider)
    }

    /// Add `rider` to the car.  Capacity is the caller's responsibility.
    pub(crate) fn load(&mut self, rider: RiderId) {
        debug_assert!(!self.is_full(), "{} boarded while full", self.id);
        self.occupants.insert(rider);
    }

    pub(crate) fn offload(&mut self, rider: RiderId) {
        self.occupants.remove(&rider);
    }

    /// Advance one tick.
    ///
    /// Returns the floor taken from `actions`, if this car was dispatched.
    ///
    /// 1. At the target floor: take the next target (or go idle if the
    ///    queue is drained).
    /// 2. Move `speed` floors in the current direction.
    /// 3. If the discrete floor changed, tell every occupant.
    /// 4. A discrete floor outside `[1, top_floor]` aborts the run.
    pub fn tick(
        &mut self,
        now:     Tick,
        actions: &mut ActionQueue<'_>,
        riders:  &mut [Rider],
    ) -> SimResult<Option<Floor>> {
        let before = self.floor();
        let mut dispatched = None;

        if before == Some(self.target) {
            match actions.next_target() {
                None => self.direction = Direction::Idle,
                Some(next) => {
                    self.direction = Direction::towards(self.target, next);
                    self.target = next;
                    dispatched = Some(next);
                }
            }
        }

        self.position += self.speed * self.direction.step();

        let after = self.floor();
        if after != before {
            for &rider in &self.occupants {
                riders[rider.index()].set_floor(self.id, after)?;
            }
        }

        if let Some(floor) = after {
            if floor < 1 || floor > self.top_floor {
                return Err(SimError::FloorOutOfRange {
                    car:       self.id,
                    floor,
                    top_floor: self.top_floor,
                    tick:      now,
                });
            }
        }

        Ok(dispatched)
    }
}
