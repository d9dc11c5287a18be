//! Rider state and the boarding/alighting protocol.

use std::collections::VecDeque;

use lift_core::{ElevatorId, Floor, RiderId};

use crate::{Elevator, SimError, SimResult};

/// Every rider starts the run on this landing.
pub const GROUND_FLOOR: Floor = 1;

/// What a rider did during its step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiderStep {
    Waited,
    Boarded { car: ElevatorId, floor: Floor },
    Alighted { car: ElevatorId, floor: Floor },
}

/// One passenger, alive for the whole run.
///
/// `floor` is `None` only while riding a car that is between floors.  It is
/// changed exclusively through [`set_floor`][Self::set_floor] by the car the
/// rider is in.
#[derive(Clone, Debug)]
pub struct Rider {
    id:           RiderId,
    destinations: VecDeque<Floor>,
    riding:       Option<ElevatorId>,
    floor:        Option<Floor>,
}

impl Rider {
    pub fn new(id: RiderId) -> Self {
        Self {
            id,
            destinations: VecDeque::new(),
            riding:       None,
            floor:        Some(GROUND_FLOOR),
        }
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn floor(&self) -> Option<Floor> {
        self.floor
    }

    pub fn riding(&self) -> Option<ElevatorId> {
        self.riding
    }

    /// Pending destinations, earliest first.
    pub fn destinations(&self) -> impl Iterator<Item = Floor> + '_ {
        self.destinations.iter().copied()
    }

    pub fn pending(&self) -> usize {
        self.destinations.len()
    }

    /// Queue a released request's destination.
    pub(crate) fn push_destination(&mut self, floor: Floor) {
        self.destinations.push_back(floor);
    }

    /// One protocol step.
    ///
    /// On a landing: board the first car (in `cars` order) that is stopped at
    /// this floor and not full.  In a car: alight when the current floor is
    /// the head of the destination queue, completing that destination.
    pub fn tick(&mut self, cars: &mut [Elevator]) -> RiderStep {
        let Some(&dest) = self.destinations.front() else {
            return RiderStep::Waited;
        };
        let Some(floor) = self.floor else {
            return RiderStep::Waited;
        };

        match self.riding {
            None => {
                let Some(car) = cars
                    .iter_mut()
                    .find(|c| c.floor() == Some(floor) && !c.is_full())
                else {
                    return RiderStep::Waited;
                };
                car.load(self.id);
                self.riding = Some(car.id());
                RiderStep::Boarded { car: car.id(), floor }
            }
            Some(car) if floor == dest => {
                cars[car.index()].offload(self.id);
                self.riding = None;
                self.destinations.pop_front();
                RiderStep::Alighted { car, floor }
            }
            Some(_) => RiderStep::Waited,
        }
    }

    /// Floor-change notification from the car `sender`.
    ///
    /// Rejected unless the rider is currently riding `sender`.
    pub fn set_floor(&mut self, sender: ElevatorId, floor: Option<Floor>) -> SimResult<()> {
        if self.riding != Some(sender) {
            return Err(SimError::InvalidLinkage {
                rider:  self.id,
                sender,
                riding: self.riding,
            });
        }
        self.floor = floor;
        Ok(())
    }
}
