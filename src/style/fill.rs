//! Background fill helpers

use umya_spreadsheet::Cell;

/// Set a cell's background to a solid fill of the given color
///
/// `color` is an ARGB/RGB hex string; it is used as both the start and end
/// color of a solid pattern fill.
pub fn apply_fill<S: Into<String>>(cell: &mut Cell, color: S) {
    cell.get_style_mut().set_background_color(color);
}
