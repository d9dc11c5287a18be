//! The best-result artifact: a candidate's consumed actions as one
//! comma-separated line.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use lift_core::Floor;

use crate::{OutputError, OutputResult};

/// Overwrite `path` with `actions` as a single comma-separated line.
pub fn write_best_actions(path: &Path, actions: &[Floor]) -> OutputResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(actions.iter().map(|f| f.to_string()))?;
    writer.flush()?;
    Ok(())
}

/// Read back a file written by [`write_best_actions`].
pub fn read_best_actions(path: &Path) -> OutputResult<Vec<Floor>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let Some(record) = reader.records().next() else {
        return Ok(Vec::new());
    };
    record?
        .iter()
        .map(|field| {
            field
                .parse::<Floor>()
                .map_err(|_| OutputError::Malformed(format!("invalid floor {field:?}")))
        })
        .collect()
}
