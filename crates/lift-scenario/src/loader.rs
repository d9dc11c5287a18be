//! Scenario text loader.
//!
//! # Format
//!
//! Whitespace-separated fields, one record per line:
//!
//! ```text
//! N                                     number of elevator cars
//! <id> <capacity> <speed> <startFloor>  repeated N times
//! M                                     number of requests
//! <riderId> <time> <fromFloor> <toFloor>  repeated M times
//! ```
//!
//! Blank lines are ignored.  Every error names the 1-based line it came from.
//! Parsing only extracts records; ordering, rider numbering and range checks
//! are done by [`ScenarioBuilder::build`].

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use lift_core::Tick;

use crate::{CarSpec, Request, Scenario, ScenarioBuilder, ScenarioError, ScenarioResult};

/// Load a scenario from a text file.
pub fn load_scenario(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(mut reader: R) -> ScenarioResult<Scenario> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_scenario(&text)
}

/// Parse a scenario from its text description.
pub fn parse_scenario(text: &str) -> ScenarioResult<Scenario> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut builder = ScenarioBuilder::new();

    // ── Cars ──────────────────────────────────────────────────────────────
    let car_count: usize = match lines.next() {
        Some((n, line)) => single_field(n, line, "car count")?,
        None => return Err(ScenarioError::Invalid("empty scenario description".into())),
    };
    for i in 0..car_count {
        let Some((n, line)) = lines.next() else {
            return Err(ScenarioError::CountMismatch { expected: car_count, got: i, what: "car lines" });
        };
        let [name, capacity, speed, start] = fields::<4>(n, line, "<id> <capacity> <speed> <startFloor>")?;
        builder.push_car(CarSpec {
            name:        name.to_owned(),
            capacity:    parse_field(n, capacity, "capacity")?,
            speed:       parse_field(n, speed, "speed")?,
            start_floor: parse_field(n, start, "start floor")?,
        });
    }

    // ── Requests ──────────────────────────────────────────────────────────
    let request_count: usize = match lines.next() {
        Some((n, line)) => single_field(n, line, "request count")?,
        None => return Err(ScenarioError::Invalid("missing request count line".into())),
    };
    let mut seen = 0usize;
    for (n, line) in lines {
        let [rider, time, from, to] = fields::<4>(n, line, "<riderId> <time> <fromFloor> <toFloor>")?;
        builder.push_request(rider, Request {
            time: Tick(parse_field(n, time, "time")?),
            from: parse_field(n, from, "from floor")?,
            to:   parse_field(n, to, "to floor")?,
        });
        seen += 1;
    }
    if seen != request_count {
        return Err(ScenarioError::CountMismatch { expected: request_count, got: seen, what: "request lines" });
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fields<'a, const K: usize>(line_no: usize, line: &'a str, shape: &str) -> ScenarioResult<[&'a str; K]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    <[&str; K]>::try_from(parts).map_err(|parts| ScenarioError::Parse {
        line:    line_no,
        message: format!("expected {K} fields ({shape}), found {}", parts.len()),
    })
}

fn single_field<T: FromStr>(line_no: usize, line: &str, what: &str) -> ScenarioResult<T> {
    let [value] = fields::<1>(line_no, line, what)?;
    parse_field(line_no, value, what)
}

fn parse_field<T: FromStr>(line_no: usize, value: &str, what: &str) -> ScenarioResult<T> {
    value.parse::<T>().map_err(|_| ScenarioError::Parse {
        line:    line_no,
        message: format!("invalid {what} {value:?}"),
    })
}
