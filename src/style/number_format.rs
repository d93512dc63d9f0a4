//! Number format helpers
//!
//! Format codes are the library's display-format pattern strings, e.g.
//! `"0.00%"`, `"0%"`, `"#,##0"`, `"MM/YYYY"`, `"MM/DD/YYYY"`.

use umya_spreadsheet::Cell;

/// Default number format: BRL currency with two decimals
pub const DEFAULT_NUMBER_FORMAT: &str = "R$ #,##0.00";

/// Set a cell's display number-format code
pub fn apply_number_format<S: Into<String>>(cell: &mut Cell, format: S) {
    cell.get_style_mut()
        .get_number_format_mut()
        .set_format_code(format);
}

/// Set a cell's display format to the default currency format
pub fn apply_currency_format(cell: &mut Cell) {
    apply_number_format(cell, DEFAULT_NUMBER_FORMAT);
}
