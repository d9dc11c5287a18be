//! `lift-sim` — the simulation engine that scores a candidate dispatch policy.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.max_ticks:
//!   ① Release   — requests scheduled for this tick join their rider's
//!                 destination queue.
//!   ② Riders    — each rider with pending work boards a car stopped at its
//!                 floor, or alights when the car reaches the queue head.
//!                 If no work is left anywhere, this is the final tick.
//!   ③ Elevators — fastest car first: cars at their target pull the next
//!                 floor from the shared action queue, then move one step.
//!                 This runs in the final tick too.
//! ```
//!
//! A run ends when every request has been released and delivered, or when
//! the tick budget runs out.  Either way it reduces to a [`RunResult`].
//! Internal-consistency violations abort the run with a [`SimError`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`evaluate_batch`] runs on Rayon's thread pool.        |
//! | `serde`    | Serde derives on `RunResult` and `Outcome`.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::evaluate;
//!
//! let result = evaluate(&scenario, &[3, 1, 5], &SimConfig::default())?;
//! println!("fitness {:.6} after {}", result.fitness, result.final_tick);
//! ```

pub mod action;
pub mod batch;
pub mod builder;
pub mod elevator;
pub mod error;
pub mod fitness;
pub mod observer;
pub mod rider;
pub mod sim;

#[cfg(test)]
mod tests;

pub use action::ActionQueue;
pub use batch::{evaluate, evaluate_batch};
pub use builder::SimBuilder;
pub use elevator::Elevator;
pub use error::{SimError, SimResult};
pub use fitness::{Outcome, RunResult, fitness};
pub use observer::{NoopObserver, SimObserver};
pub use rider::{Rider, RiderStep};
pub use sim::Simulation;
