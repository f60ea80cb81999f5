//! Result table assembly
//!
//! Per-batch outcome lists are concatenated in batch order and prefixed with
//! the fixed header row. No deduplication and no sorting happen here.

use serde::Serialize;
use std::fmt;

use crate::core::lookup::{NOT_FOUND_MARKER, Outcome};

/// Header row of every result table
pub const HEADER: [&str; 3] = ["Postcodes", "Latitude", "Longitude"];

/// One cell of the result table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableCell {
    Text(String),
    Number(f64),
    Empty,
}

impl TableCell {
    fn coordinate(value: Option<f64>) -> Self {
        value.map(TableCell::Number).unwrap_or(TableCell::Empty)
    }
}

impl fmt::Display for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableCell::Text(text) => f.write_str(text),
            TableCell::Number(n) => write!(f, "{}", n),
            TableCell::Empty => Ok(()),
        }
    }
}

/// A row of the result table: postcode, latitude, longitude
pub type ResultRow = [TableCell; 3];

/// Table row for one outcome
pub fn outcome_row(outcome: &Outcome) -> ResultRow {
    match outcome {
        Outcome::Resolved {
            postcode,
            latitude,
            longitude,
        } => [
            TableCell::Text(postcode.clone()),
            TableCell::coordinate(*latitude),
            TableCell::coordinate(*longitude),
        ],
        Outcome::Unresolved { query } => [
            TableCell::Text(query.clone()),
            TableCell::Text(NOT_FOUND_MARKER.to_string()),
            TableCell::Text(NOT_FOUND_MARKER.to_string()),
        ],
    }
}

/// Header row followed by one row per outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Table holding only the header row
    pub fn empty() -> Self {
        Self {
            rows: vec![header_row()],
        }
    }

    /// All rows, header first
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn header(&self) -> &ResultRow {
        &self.rows[0]
    }

    /// Rows after the header, one per looked-up postcode
    pub fn data_rows(&self) -> &[ResultRow] {
        &self.rows[1..]
    }

    /// Row count including the header
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.len() == 1
    }
}

impl Default for ResultTable {
    fn default() -> Self {
        Self::empty()
    }
}

fn header_row() -> ResultRow {
    HEADER.map(|title| TableCell::Text(title.to_string()))
}

/// Concatenate outcome lists in batch order and prepend the header row
pub fn assemble<I, B>(batches: I) -> ResultTable
where
    I: IntoIterator<Item = B>,
    B: AsRef<[Outcome]>,
{
    let mut rows = vec![header_row()];
    for outcomes in batches {
        rows.extend(outcomes.as_ref().iter().map(outcome_row));
    }
    ResultTable { rows }
}
