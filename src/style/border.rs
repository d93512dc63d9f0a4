//! Border helpers
//!
//! A border is built from up to four independently optional edge descriptors
//! ([`side`]); edges left unset stay borderless.

use umya_spreadsheet::{Border, Cell};

/// Default border line style
pub const DEFAULT_SIDE_STYLE: &str = Border::BORDER_MEDIUM;

/// Default border color (black, RGB hex)
pub const DEFAULT_SIDE_COLOR: &str = "000000";

/// Construct a single border-edge descriptor with the given line style and
/// color
///
/// `style` is one of the library's named border styles (see the
/// `Border::BORDER_*` constants, e.g. thin/medium/thick).
pub fn side<S: Into<String>, C: Into<String>>(style: S, color: C) -> Border {
    let mut side = Border::default();
    side.set_border_style(style.into());
    side.get_color_mut().set_argb(color.into());
    side
}

/// Construct the default edge descriptor: a medium black line
pub fn default_side() -> Border {
    side(DEFAULT_SIDE_STYLE, DEFAULT_SIDE_COLOR)
}

/// Up to four independently optional border edges for a cell
#[derive(Debug, Clone, Default)]
pub struct CellBorders {
    /// Bottom edge
    pub bottom: Option<Border>,
    /// Left edge
    pub left: Option<Border>,
    /// Right edge
    pub right: Option<Border>,
    /// Top edge
    pub top: Option<Border>,
}

impl CellBorders {
    /// Create a border set with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bottom edge
    pub fn with_bottom(mut self, side: Border) -> Self {
        self.bottom = Some(side);
        self
    }

    /// Set the left edge
    pub fn with_left(mut self, side: Border) -> Self {
        self.left = Some(side);
        self
    }

    /// Set the right edge
    pub fn with_right(mut self, side: Border) -> Self {
        self.right = Some(side);
        self
    }

    /// Set the top edge
    pub fn with_top(mut self, side: Border) -> Self {
        self.top = Some(side);
        self
    }
}

/// Assign the composite border descriptor to a cell
///
/// All four edges are replaced: edges left unset in `borders` are reset to
/// borderless, so the result does not depend on the cell's previous borders.
pub fn apply_borders(cell: &mut Cell, borders: &CellBorders) {
    let target = cell.get_style_mut().get_borders_mut();
    set_edge(target.get_bottom_mut(), borders.bottom.as_ref());
    set_edge(target.get_left_mut(), borders.left.as_ref());
    set_edge(target.get_right_mut(), borders.right.as_ref());
    set_edge(target.get_top_mut(), borders.top.as_ref());
}

fn set_edge(edge: &mut Border, side: Option<&Border>) {
    match side {
        Some(side) => *edge = side.clone(),
        None => *edge = Border::default(),
    }
}
