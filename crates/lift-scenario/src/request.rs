//! Immutable scenario value types.

use lift_core::{Floor, RiderId, Tick};

/// One ride request: at `time`, a rider asks to travel from `from` to `to`.
///
/// The origin floor is carried for reporting only.  Riders board whichever
/// car stops at their *current* floor, so nothing in the simulation reads
/// `from`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub time: Tick,
    pub from: Floor,
    pub to:   Floor,
}

/// A request bound to the rider that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledRequest {
    pub rider:   RiderId,
    pub request: Request,
}

/// Static description of one elevator car.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSpec {
    /// Label from the scenario description.
    pub name:        String,
    pub capacity:    u32,
    /// Floors travelled per tick.
    pub speed:       f64,
    pub start_floor: Floor,
}
