//! Raw selection grids and their flattening into postcode sequences
//!
//! A [`RawGrid`] is whatever rectangular (or ragged) block of cells the host
//! selection surface hands over. [`flatten_filter`] walks it row-major and keeps
//! every non-empty cell, producing the [`CodeSequence`] the batcher consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::Result;

/// A single cell of the host selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// String form submitted to the lookup service
    pub fn as_code(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_code())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Rows of cells, possibly of unequal length
pub type RawGrid = Vec<Vec<CellValue>>;

/// Host selection surface handing over a grid of cells
pub trait GridSource {
    /// Read the current selection
    fn read_grid(&mut self) -> Result<RawGrid>;
}

impl GridSource for RawGrid {
    fn read_grid(&mut self) -> Result<RawGrid> {
        Ok(self.clone())
    }
}

/// Build a grid from string rows, mapping `""` to [`CellValue::Empty`]
pub fn grid_from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> RawGrid
where
    R: IntoIterator<Item = S>,
    S: Into<CellValue>,
{
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

/// Ordered, non-empty postcode strings in row-major order of the source grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CodeSequence(Vec<String>);

impl CodeSequence {
    /// Keep every non-empty code, in order. No trimming or case folding.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            codes
                .into_iter()
                .map(Into::into)
                .filter(|code| !code.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a CodeSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Row-major traversal of every cell, each row walked to its own length
pub fn flatten(grid: &[Vec<CellValue>]) -> Vec<String> {
    grid.iter()
        .flat_map(|row| row.iter().map(CellValue::as_code))
        .collect()
}

/// Flatten the grid and drop entries equal to the empty string
pub fn flatten_filter(grid: &[Vec<CellValue>]) -> CodeSequence {
    CodeSequence::from_codes(flatten(grid))
}
