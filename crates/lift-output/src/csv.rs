//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `generations.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, GenerationRow, OutputResult};

pub const GENERATION_HEADER: [&str; 6] =
    ["generation", "fitness", "elite", "final_tick", "unfulfilled", "used_actions"];
pub const EVENT_HEADER: [&str; 5] = ["tick", "event", "rider", "car", "floor"];

/// Writes search progress and event traces to two CSV files.
pub struct CsvWriter {
    generations: Writer<File>,
    events:      Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut generations = Writer::from_path(dir.join("generations.csv"))?;
        generations.write_record(GENERATION_HEADER)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADER)?;

        Ok(Self { generations, events, finished: false })
    }
}

fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()> {
        self.generations.write_record(&[
            row.generation.to_string(),
            format!("{:.9}", row.fitness),
            (row.elite as u8).to_string(),
            row.final_tick.to_string(),
            row.unfulfilled.to_string(),
            row.used_actions.to_string(),
        ])?;
        // Generations are slow; keep the log current for `tail -f`.
        self.generations.flush()?;
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.kind.as_str().to_owned(),
                opt(row.rider),
                opt(row.car),
                row.floor.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.generations.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
