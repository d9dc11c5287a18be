//! `lift-scenario` — the fixed input every simulation run replays.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`request`]  | `Request`, `ScheduledRequest`, `CarSpec`                    |
//! | [`scenario`] | `Scenario` (read-only, shared across runs), `ScenarioBuilder` |
//! | [`loader`]   | line-oriented text loader                                   |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                        |
//!
//! A `Scenario` is never mutated after `build()`: every fitness evaluation
//! constructs its own riders and cars from it, so one instance can be shared
//! by reference across threads.

pub mod error;
pub mod loader;
pub mod request;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario, load_scenario_reader, parse_scenario};
pub use request::{CarSpec, Request, ScheduledRequest};
pub use scenario::{Scenario, ScenarioBuilder};
