use lift_core::{CoreError, ElevatorId, Floor, RiderId, Tick};
use thiserror::Error;

/// Reasons a simulation run is aborted instead of producing a [`RunResult`].
///
/// `FloorOutOfRange` and `InvalidLinkage` are defects in the engine itself,
/// never in candidate data: a correct engine fed a valid scenario does not
/// produce them.
///
/// [`RunResult`]: crate::RunResult
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("{car} reached floor {floor} outside [1, {top_floor}] at {tick}")]
    FloorOutOfRange {
        car:       ElevatorId,
        floor:     Floor,
        top_floor: Floor,
        tick:      Tick,
    },

    #[error("{rider} received a floor change from {sender} while riding {riding:?}")]
    InvalidLinkage {
        rider:  RiderId,
        sender: ElevatorId,
        riding: Option<ElevatorId>,
    },

    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),
}

impl SimError {
    /// `true` for the fatal engine defects, `false` for setup errors.
    pub fn is_defect(&self) -> bool {
        matches!(self, SimError::FloorOutOfRange { .. } | SimError::InvalidLinkage { .. })
    }
}

pub type SimResult<T> = Result<T, SimError>;
