//! `lift-output` — files written while searching for a dispatch policy.
//!
//! | Artifact          | Writer                                   | Content                               |
//! |-------------------|------------------------------------------|---------------------------------------|
//! | best result       | [`write_best_actions`]                   | one comma-separated line of floors    |
//! | `generations.csv` | [`OutputWriter::write_generation`]       | one row per search generation         |
//! | `events.csv`      | [`TraceObserver`] → [`OutputWriter`]     | every event of a replayed candidate   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! SimBuilder::new(&scenario, &best).build()?.run_observed(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod best;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use best::{read_best_actions, write_best_actions};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{EventKind, EventRow, GenerationRow};
pub use writer::OutputWriter;
