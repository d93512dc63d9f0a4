//! Alignment helpers

use umya_spreadsheet::{Alignment, Cell, HorizontalAlignmentValues};

/// Center a cell's contents horizontally, returning the alignment applied
pub fn apply_center_alignment(cell: &mut Cell) -> Alignment {
    let alignment = cell.get_style_mut().get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.clone()
}
