//! Selection fixtures
//!
//! All fixtures are real grids, not mocks.

use postcode_geocoder::{RawGrid, grid_from_rows};

/// Two-column selection with blanks and one unmatched code
pub fn mixed_selection() -> RawGrid {
    grid_from_rows([
        vec!["SW1A 1AA", ""],
        vec!["", "EC1A 1BB"],
        vec!["notapostcode", "M1 1AE"],
    ])
}

/// Codes of the selection above in row-major order
pub fn mixed_selection_codes() -> Vec<&'static str> {
    vec!["SW1A 1AA", "EC1A 1BB", "notapostcode", "M1 1AE"]
}

/// One-column selection of `n` distinct codes
pub fn numbered_codes(n: usize) -> RawGrid {
    grid_from_rows((0..n).map(|i| vec![format!("AB{} {}CD", i / 10, i % 10)]))
}

/// Selection made only of empty cells
pub fn blank_selection() -> RawGrid {
    grid_from_rows([vec!["", ""], vec!["", ""]])
}
