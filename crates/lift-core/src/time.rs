//! Simulation time and run configuration.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.  Runs start at tick 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Tunables for a single simulation run.
///
/// `SimConfig::default()` reproduces the reference constants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Tick budget.  A run still holding work at this tick times out.
    pub max_ticks: u64,

    /// Normalisation constant K for the timed-out fitness branch:
    /// `(1 - unfulfilled / K) / 10_000`.
    pub unfulfilled_norm: f64,

    /// Maximum distance from an integer for a car to count as at a floor.
    pub floor_tolerance: f64,
}

impl SimConfig {
    pub const DEFAULT_MAX_TICKS: u64 = 2_500;
    pub const DEFAULT_UNFULFILLED_NORM: f64 = 359.0;
    pub const DEFAULT_FLOOR_TOLERANCE: f64 = 1e-6;

    /// The tick at which a run gives up (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Same configuration with a different tick budget.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_ticks == 0 {
            return Err(CoreError::Config("max_ticks must be at least 1".into()));
        }
        if !(self.unfulfilled_norm.is_finite() && self.unfulfilled_norm > 0.0) {
            return Err(CoreError::Config(format!(
                "unfulfilled_norm must be positive, got {}",
                self.unfulfilled_norm
            )));
        }
        if !(self.floor_tolerance.is_finite()
            && self.floor_tolerance > 0.0
            && self.floor_tolerance < 0.5)
        {
            return Err(CoreError::Config(format!(
                "floor_tolerance must lie in (0, 0.5), got {}",
                self.floor_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks:        Self::DEFAULT_MAX_TICKS,
            unfulfilled_norm: Self::DEFAULT_UNFULFILLED_NORM,
            floor_tolerance:  Self::DEFAULT_FLOOR_TOLERANCE,
        }
    }
}
