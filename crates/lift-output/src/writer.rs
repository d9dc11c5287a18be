//! The `OutputWriter` trait implemented by the CSV backend.

use crate::{EventRow, GenerationRow, OutputResult};

pub trait OutputWriter {
    /// Write one generation summary row.
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()>;

    /// Write a batch of simulation events.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
