//! Parsers for the two line-oriented input files.
//!
//! Both files start with a record count on its own line, followed by that
//! many `|`-separated records:
//!
//! - flight data: `origin|destination|cost|time`
//! - requests: `origin|destination|preference`
//!
//! Fields are trimmed. Blank lines before the last expected record are
//! rejected; lines after the announced count are ignored.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::FlightRecord;
use crate::routing::{Preference, RouteRequest};

const FLIGHT_SOURCE: &str = "flight data";
const REQUEST_SOURCE: &str = "request file";

/// Load flight records from a file path.
pub fn load_flights(path: &Path) -> Result<Vec<FlightRecord>> {
    let file = open_input(path)?;
    parse_flights(file)
}

/// Load route requests from a file path.
pub fn load_requests(path: &Path) -> Result<Vec<RouteRequest>> {
    let file = open_input(path)?;
    parse_requests(file)
}

/// Parse flight records from a reader (e.g. file or in-memory buffer).
pub fn parse_flights<R: Read>(reader: R) -> Result<Vec<FlightRecord>> {
    read_counted(reader, FLIGHT_SOURCE, 4)?
        .into_iter()
        .map(|(line, record)| {
            let origin = city_field(&record, 0, FLIGHT_SOURCE, line)?;
            let destination = city_field(&record, 1, FLIGHT_SOURCE, line)?;

            let cost = record[2].parse::<f64>().map_err(|err| {
                let message = format!("invalid cost '{}': {err}", &record[2]);
                Error::malformed(FLIGHT_SOURCE, line, message)
            })?;
            if !cost.is_finite() || cost < 0.0 {
                return Err(Error::malformed(
                    FLIGHT_SOURCE,
                    line,
                    format!("cost must be a non-negative number, got {cost}"),
                ));
            }

            let time = record[3].parse::<u32>().map_err(|err| {
                let message = format!("invalid time '{}': {err}", &record[3]);
                Error::malformed(FLIGHT_SOURCE, line, message)
            })?;

            Ok(FlightRecord {
                origin,
                destination,
                cost,
                time,
            })
        })
        .collect()
}

/// Parse route requests from a reader.
pub fn parse_requests<R: Read>(reader: R) -> Result<Vec<RouteRequest>> {
    read_counted(reader, REQUEST_SOURCE, 3)?
        .into_iter()
        .map(|(line, record)| {
            let origin = city_field(&record, 0, REQUEST_SOURCE, line)?;
            let destination = city_field(&record, 1, REQUEST_SOURCE, line)?;
            let preference = record[2]
                .chars()
                .next()
                .map(Preference::from_char)
                .ok_or_else(|| Error::malformed(REQUEST_SOURCE, line, "missing preference"))?;

            Ok(RouteRequest {
                origin,
                destination,
                preference,
            })
        })
        .collect()
}

fn open_input(path: &Path) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::File::open(path)?)
}

/// Read the count line and exactly that many records with `fields` columns.
fn read_counted<R: Read>(
    reader: R,
    source_name: &str,
    fields: usize,
) -> Result<Vec<(u64, StringRecord)>> {
    let text = io::read_to_string(reader)?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'|')
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let mut records = csv_reader.records();

    let count_record = records
        .next()
        .transpose()?
        .ok_or_else(|| Error::malformed(source_name, 1, "missing record count"))?;
    let count_line = line_of(&count_record);
    if count_record.len() != 1 {
        return Err(Error::malformed(
            source_name,
            count_line,
            "first line must contain only the record count",
        ));
    }
    let expected = count_record[0].parse::<usize>().map_err(|err| {
        Error::malformed(
            source_name,
            count_line,
            format!("invalid record count '{}': {err}", &count_record[0]),
        )
    })?;

    // The delimited reader skips empty lines, which would shift records
    // onto later lines without counting the gap.
    if let Some(index) = text
        .lines()
        .take(expected.saturating_add(1))
        .position(|line| line.trim().is_empty())
    {
        return Err(Error::malformed(
            source_name,
            index as u64 + 1,
            "blank line where a record was expected",
        ));
    }

    let mut parsed = Vec::with_capacity(expected.min(1024));
    let mut last_line = count_line;
    for result in records.by_ref().take(expected) {
        let record = result?;
        let line = line_of(&record);
        last_line = line;
        if record.len() != fields {
            return Err(Error::malformed(
                source_name,
                line,
                format!("expected {fields} '|'-separated fields, found {}", record.len()),
            ));
        }
        parsed.push((line, record));
    }

    if parsed.len() < expected {
        return Err(Error::malformed(
            source_name,
            last_line + 1,
            format!("expected {expected} records, found {}", parsed.len()),
        ));
    }

    let ignored = records.count();
    if ignored > 0 {
        warn!(
            source = source_name,
            ignored, "ignoring lines after the announced record count"
        );
    }

    Ok(parsed)
}

fn city_field(
    record: &StringRecord,
    index: usize,
    source_name: &str,
    line: u64,
) -> Result<String> {
    let value = &record[index];
    if value.is_empty() {
        return Err(Error::malformed(
            source_name,
            line,
            "city name must not be empty",
        ));
    }
    Ok(value.to_string())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|position| position.line()).unwrap_or(0)
}
