//! # xlsx-kit
//!
//! Convenience helpers for creating, loading, and styling XLSX workbooks on
//! top of [`umya_spreadsheet`].
//!
//! Every function is a thin forwarding call into the underlying library's
//! object model: it takes a cell or workbook handle plus primitive
//! parameters and sets a style attribute, or constructs a style value
//! object. There is no state held by this crate.
//!
//! ## Example
//!
//! ```rust
//! use xlsx_kit::{apply_currency_format, apply_header_cell, create_workbook};
//!
//! let mut book = create_workbook();
//! let sheet = book.get_active_sheet_mut();
//!
//! sheet.get_cell_mut("A1").set_value("Total");
//! apply_header_cell(sheet.get_cell_mut("A1"));
//!
//! sheet.get_cell_mut("A2").set_value_number(1234.5);
//! apply_currency_format(sheet.get_cell_mut("A2"));
//! ```

pub mod comment;
pub mod error;
pub mod style;
pub mod workbook;

// Re-exports for convenience
pub use comment::add_comment;
pub use error::{Error, Result};
pub use style::{
    apply_borders, apply_center_alignment, apply_currency_format, apply_fill, apply_font,
    apply_header_cell, apply_number_format, default_side, side, CellBorders, FontOptions,
    DEFAULT_FONT_COLOR, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DEFAULT_NUMBER_FORMAT,
    DEFAULT_SIDE_COLOR, DEFAULT_SIDE_STYLE,
};
pub use workbook::{create_workbook, load_workbook, load_workbook_data_only, save_workbook};

// Re-export the underlying object model so callers need no direct
// dependency on umya-spreadsheet for the common cases
pub use umya_spreadsheet::{
    Alignment, Border, Cell, Comment, HorizontalAlignmentValues, Spreadsheet, Worksheet,
};
