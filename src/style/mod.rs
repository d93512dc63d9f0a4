//! Cell styling helpers
//!
//! Each helper forwards a handful of parameters into the underlying
//! library's style objects on a cell:
//! - [`apply_font`] - font name/size/weight/color
//! - [`apply_fill`] - solid background color
//! - [`apply_borders`] / [`side`] - cell borders
//! - [`apply_center_alignment`] - horizontal centering
//! - [`apply_number_format`] - display format codes
//! - [`apply_header_cell`] - the fixed header bundle

mod alignment;
mod border;
mod fill;
mod font;
mod number_format;

pub use alignment::apply_center_alignment;
pub use border::{
    apply_borders, default_side, side, CellBorders, DEFAULT_SIDE_COLOR, DEFAULT_SIDE_STYLE,
};
pub use fill::apply_fill;
pub use font::{
    apply_font, FontOptions, DEFAULT_FONT_COLOR, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE,
};
pub use number_format::{apply_currency_format, apply_number_format, DEFAULT_NUMBER_FORMAT};

use umya_spreadsheet::Cell;

/// Apply the fixed header bundle to a cell: centered contents, a medium
/// black bottom border, and a bold font
///
/// The font keeps the library's default face; only the bold flag is set.
/// There is deliberately no configurability here.
pub fn apply_header_cell(cell: &mut Cell) {
    apply_center_alignment(cell);
    apply_borders(cell, &CellBorders::new().with_bottom(default_side()));
    cell.get_style_mut().get_font_mut().set_bold(true);
}
