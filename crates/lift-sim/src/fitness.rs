//! Run summary and the fitness function.

use lift_core::{SimConfig, Tick};

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every request was released and delivered.
    Completed,
    /// The tick budget ran out first.
    TimedOut,
}

/// The single record a run reduces to.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    pub outcome:      Outcome,
    /// Tick at which the run ended.  For a completed run this is the tick in
    /// which the last rider alighted.
    pub final_tick:   Tick,
    /// Destinations still queued across all riders.
    pub unfulfilled:  usize,
    pub fitness:      f64,
    /// Targets taken from the candidate (length minus what was left).
    pub used_actions: usize,
}

impl RunResult {
    pub fn is_complete(&self) -> bool {
        self.outcome == Outcome::Completed
    }
}

/// Score a finished run.
///
/// - Work left over: `(1 - unfulfilled / K) / 10_000`, far below any
///   completed score but still rewarding near-misses.
/// - Nothing left: `e^(-final_tick / 1000)`, in `(0, 1]`.
pub fn fitness(final_tick: Tick, unfulfilled: usize, config: &SimConfig) -> f64 {
    if unfulfilled > 0 {
        (1.0 - unfulfilled as f64 / config.unfulfilled_norm) / 10_000.0
    } else {
        (-(final_tick.0 as f64) / 1_000.0).exp()
    }
}
