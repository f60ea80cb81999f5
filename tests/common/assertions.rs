//! Custom test assertions for result tables

use postcode_geocoder::{HEADER, NOT_FOUND_MARKER, ResultTable, TableCell};

/// Assertions for ResultTable
pub trait ResultTableAssertions {
    /// Assert the first row is the fixed header
    fn assert_has_header(&self);

    /// Assert the postcode column, header excluded
    fn assert_codes(&self, expected: &[&str]);

    /// Assert row `row` (1-based, header is row 0) is an unmatched code
    fn assert_unmatched(&self, row: usize);
}

impl ResultTableAssertions for ResultTable {
    fn assert_has_header(&self) {
        let header: Vec<String> = self.header().iter().map(|c| c.to_string()).collect();
        assert_eq!(header, HEADER, "Expected the fixed header row");
    }

    fn assert_codes(&self, expected: &[&str]) {
        let codes: Vec<String> = self.data_rows().iter().map(|r| r[0].to_string()).collect();
        assert_eq!(codes, expected, "Postcode column differs");
    }

    fn assert_unmatched(&self, row: usize) {
        let marker = TableCell::Text(NOT_FOUND_MARKER.to_string());
        let cells = &self.rows()[row];
        assert_eq!(cells[1], marker, "Expected latitude marker in row {}", row);
        assert_eq!(cells[2], marker, "Expected longitude marker in row {}", row);
    }
}
