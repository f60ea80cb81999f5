//! Reading selection grids from CSV
//!
//! A CSV file stands in for the spreadsheet: no header row is assumed and rows
//! may have different lengths. A [`Selection`] narrows it to the active range.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::core::grid::{CellValue, GridSource, RawGrid};
use crate::utils::error::{GeocoderError, Result};

/// Grid source backed by CSV text
pub struct CsvGridSource<R> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvGridSource<R> {
    pub fn new(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self { reader }
    }
}

impl CsvGridSource<File> {
    /// Open a CSV file; a missing or unreadable file is `InputUnavailable`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeocoderError::input_unavailable(format!("Cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> GridSource for CsvGridSource<R> {
    fn read_grid(&mut self) -> Result<RawGrid> {
        let mut grid = RawGrid::new();
        for record in self.reader.records() {
            let record = record.map_err(|e| GeocoderError::input_unavailable(e.to_string()))?;
            grid.push(record.iter().map(CellValue::from).collect());
        }
        debug!(rows = grid.len(), "Read selection grid");
        Ok(grid)
    }
}

/// Selection read from a CSV file, or from stdin when the location is `-`
///
/// The file is opened on read, so a missing file fails the run that reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    location: String,
}

impl InputSource {
    pub const STDIN: &'static str = "-";

    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_stdin(&self) -> bool {
        self.location == Self::STDIN
    }
}

impl GridSource for InputSource {
    fn read_grid(&mut self) -> Result<RawGrid> {
        if self.is_stdin() {
            CsvGridSource::new(std::io::stdin().lock()).read_grid()
        } else {
            CsvGridSource::from_path(&self.location)?.read_grid()
        }
    }
}

/// Active range within a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Leading rows to leave out, such as a header row
    pub skip_rows: usize,
    /// Zero-based columns to keep, in the given order; `None` keeps all
    pub columns: Option<Vec<usize>>,
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    /// Cut the selected range out of `grid`
    ///
    /// A selected column missing from a short row contributes an empty cell.
    pub fn apply(&self, grid: RawGrid) -> RawGrid {
        grid.into_iter()
            .skip(self.skip_rows)
            .map(|row| match &self.columns {
                None => row,
                Some(columns) => columns
                    .iter()
                    .map(|&c| row.get(c).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect()
    }
}

/// Applies a [`Selection`] on top of another source
pub struct SelectedSource<S> {
    inner: S,
    selection: Selection,
}

impl<S: GridSource> SelectedSource<S> {
    pub fn new(inner: S, selection: Selection) -> Self {
        Self { inner, selection }
    }
}

impl<S: GridSource> GridSource for SelectedSource<S> {
    fn read_grid(&mut self) -> Result<RawGrid> {
        let grid = self.inner.read_grid()?;
        Ok(self.selection.apply(grid))
    }
}
