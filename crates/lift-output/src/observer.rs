//! `TraceObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{ElevatorId, Floor, RiderId, Tick};
use lift_sim::{RunResult, SimObserver};

use crate::writer::OutputWriter;
use crate::{EventKind, EventRow, OutputError, OutputResult};

/// A [`SimObserver`] that records every event of a run to an
/// [`OutputWriter`].  Events are buffered per tick and written at tick end.
/// A run that aborts with a `SimError` never ends its last tick; call
/// [`flush`][Self::flush] afterwards to write those events too.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    buffer:     Vec<EventRow>,
    result:     Option<RunResult>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, buffer: Vec::new(), result: None, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// The run summary, once the run has ended.
    pub fn result(&self) -> Option<&RunResult> {
        self.result.as_ref()
    }

    /// Write any buffered events now.
    pub fn flush(&mut self) -> OutputResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let rows = std::mem::take(&mut self.buffer);
        self.writer.write_events(&rows)
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn push(&mut self, tick: Tick, kind: EventKind, rider: Option<RiderId>, car: Option<ElevatorId>, floor: Floor) {
        self.buffer.push(EventRow {
            tick: tick.0,
            kind,
            rider: rider.map(|r| r.0),
            car: car.map(|c| c.0),
            floor,
        });
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TraceObserver<W> {
    fn on_release(&mut self, tick: Tick, rider: RiderId, destination: Floor) {
        self.push(tick, EventKind::Release, Some(rider), None, destination);
    }

    fn on_board(&mut self, tick: Tick, rider: RiderId, car: ElevatorId, floor: Floor) {
        self.push(tick, EventKind::Board, Some(rider), Some(car), floor);
    }

    fn on_alight(&mut self, tick: Tick, rider: RiderId, car: ElevatorId, floor: Floor) {
        self.push(tick, EventKind::Alight, Some(rider), Some(car), floor);
    }

    fn on_dispatch(&mut self, tick: Tick, car: ElevatorId, target: Floor) {
        self.push(tick, EventKind::Dispatch, None, Some(car), target);
    }

    fn on_tick_end(&mut self, _tick: Tick, _pending: usize) {
        let result = self.flush();
        self.store_err(result);
    }

    /// Stores the summary.  The writer is left open; call
    /// [`OutputWriter::finish`] once all output is written.
    fn on_sim_end(&mut self, result: &RunResult) {
        self.result = Some(result.clone());
    }
}
