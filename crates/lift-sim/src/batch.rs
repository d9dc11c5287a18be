//! Scoring entry points used by the search procedure.
//!
//! Each evaluation builds its own riders, cars and action queue; the only
//! shared input is the read-only [`Scenario`], so evaluations are
//! independent and safe to run concurrently.

use lift_core::{Floor, SimConfig};
use lift_scenario::Scenario;

use crate::{RunResult, SimBuilder, SimResult};

/// Score one candidate on a fresh simulation.
pub fn evaluate(scenario: &Scenario, candidate: &[Floor], config: &SimConfig) -> SimResult<RunResult> {
    SimBuilder::new(scenario, candidate)
        .config(config.clone())
        .build()?
        .run()
}

/// Score many candidates.  Output order matches `candidates`.
///
/// With the `parallel` Cargo feature the evaluations run on Rayon's thread
/// pool.
pub fn evaluate_batch<C>(scenario: &Scenario, candidates: &[C], config: &SimConfig) -> Vec<SimResult<RunResult>>
where
    C: AsRef<[Floor]> + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        candidates
            .iter()
            .map(|c| evaluate(scenario, c.as_ref(), config))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        candidates
            .par_iter()
            .map(|c| evaluate(scenario, c.as_ref(), config))
            .collect()
    }
}
