//! Writing result tables
//!
//! Every write failure surfaces as `PresentationFailed`; the table is not kept
//! anywhere else once presentation fails.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::assembler::{ResultRow, ResultTable};
use crate::utils::error::{GeocoderError, Result};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Comma separated values, one row per line
    Csv,
    /// JSON array of rows
    Json,
}

/// Hands a finished result table to its destination
pub trait Presenter {
    fn present(&mut self, table: &ResultTable) -> Result<()>;
}

fn presentation_error(err: impl std::fmt::Display) -> GeocoderError {
    GeocoderError::presentation(err.to_string())
}

fn row_strings(row: &ResultRow) -> [String; 3] {
    [row[0].to_string(), row[1].to_string(), row[2].to_string()]
}

/// Writes the table as CSV
pub struct CsvPresenter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> Presenter for CsvPresenter<W> {
    fn present(&mut self, table: &ResultTable) -> Result<()> {
        for row in table.rows() {
            self.writer
                .write_record(row_strings(row))
                .map_err(presentation_error)?;
        }
        self.writer.flush().map_err(presentation_error)
    }
}

/// Writes the table as aligned columns
pub struct TextTablePresenter<W: Write> {
    writer: W,
}

impl<W: Write> TextTablePresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Presenter for TextTablePresenter<W> {
    fn present(&mut self, table: &ResultTable) -> Result<()> {
        let rows: Vec<[String; 3]> = table.rows().iter().map(row_strings).collect();

        let mut widths = [0usize; 3];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (i, row) in rows.iter().enumerate() {
            let line = format!(
                "{:<w0$}  {:<w1$}  {}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1]
            );
            writeln!(self.writer, "{}", line.trim_end()).map_err(presentation_error)?;

            if i == 0 {
                let rule = format!(
                    "{}  {}  {}",
                    "-".repeat(widths[0]),
                    "-".repeat(widths[1]),
                    "-".repeat(widths[2])
                );
                writeln!(self.writer, "{}", rule).map_err(presentation_error)?;
            }
        }

        self.writer.flush().map_err(presentation_error)
    }
}

/// Writes the table as a JSON array of rows
pub struct JsonPresenter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, table: &ResultTable) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, table).map_err(presentation_error)?;
        writeln!(self.writer).map_err(presentation_error)?;
        self.writer.flush().map_err(presentation_error)
    }
}

/// Presenter for `format` writing to `writer`
pub fn presenter_for<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
) -> Box<dyn Presenter + 'a> {
    match format {
        OutputFormat::Table => Box::new(TextTablePresenter::new(writer)),
        OutputFormat::Csv => Box::new(CsvPresenter::new(writer)),
        OutputFormat::Json => Box::new(JsonPresenter::new(writer)),
    }
}
