//! Numeric CSV ingest.
//!
//! Turns headerless, comma-delimited text into a `Table` of `f64` rows.
//!
//! Rules:
//! - fields are trimmed; an empty field is an error
//! - every field must parse completely as a finite number
//! - the first bad field aborts the whole read (no partial table)
//! - line and column numbers in diagnostics are 1-indexed
//!
//! There is no quoting or escaping, so a plain line split is all we need.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::Table;
use crate::error::{ParseError, StatsError};

const DELIMITER: u8 = b',';

/// Read a numeric table from a file path.
pub fn read_table_path(path: &Path, allow_empty: bool) -> Result<Table, StatsError> {
    let file = File::open(path).map_err(|e| StatsError::io("cannot open file", Some(path.to_path_buf()), e))?;
    read_table_labeled(BufReader::new(file), allow_empty, &path.display().to_string())
}

/// Read a numeric table from any buffered source.
pub fn read_table<R: BufRead>(source: R, allow_empty: bool) -> Result<Table, StatsError> {
    read_table_labeled(source, allow_empty, "<input>")
}

fn read_table_labeled<R: BufRead>(source: R, allow_empty: bool, label: &str) -> Result<Table, StatsError> {
    let mut rows = Vec::new();

    // Lines are split as raw bytes so that undecodable text surfaces as a
    // field-level parse error rather than a read failure.
    for (idx, line) in source.split(b'\n').enumerate() {
        let lineno = idx + 1;
        let mut line = line.map_err(|e| StatsError::io(format!("read error in {label} at line {lineno}"), None, e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        // With `allow_empty` blank lines are not special-cased and fall through
        // to field parsing.
        if !allow_empty && String::from_utf8_lossy(&line).trim().is_empty() {
            log::trace!("{label}: skipping blank line {lineno}");
            continue;
        }

        let row = parse_line(&line, lineno)?;
        if row.is_empty() {
            log::trace!("{label}: dropping zero-field line {lineno}");
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        if allow_empty {
            return Ok(Table::default());
        }
        return Err(ParseError::no_data_rows(label).into());
    }

    log::debug!("{label}: read {} rows", rows.len());
    Ok(Table::new(rows))
}

/// Parse one line into numbers; `lineno` is only used for diagnostics.
fn parse_line(line: &[u8], lineno: usize) -> Result<Vec<f64>, ParseError> {
    line.split(|&b| b == DELIMITER)
        .enumerate()
        .map(|(c, raw)| match std::str::from_utf8(raw) {
            Ok(text) => parse_field(text.trim(), lineno, c + 1),
            Err(_) => Err(ParseError::bad_number(
                lineno,
                c + 1,
                String::from_utf8_lossy(raw).trim(),
            )),
        })
        .collect()
}

fn parse_field(token: &str, line: usize, column: usize) -> Result<f64, ParseError> {
    if token.is_empty() {
        return Err(ParseError::empty_field(line, column));
    }
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::bad_number(line, column, token)),
    }
}
