//! Font helpers

use umya_spreadsheet::Cell;

/// Default font color (opaque black, ARGB hex)
pub const DEFAULT_FONT_COLOR: &str = "00000000";

/// Default font family name
pub const DEFAULT_FONT_NAME: &str = "Arial";

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Font settings applied by [`apply_font`]
///
/// The defaults mirror the house style for plain body cells: regular-weight
/// black Arial at 10pt.
#[derive(Debug, Clone, PartialEq)]
pub struct FontOptions {
    /// Bold
    pub bold: bool,
    /// Font color as an ARGB hex string
    pub color: String,
    /// Font family name
    pub name: String,
    /// Font size in points
    pub size: f64,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            bold: false,
            color: DEFAULT_FONT_COLOR.to_string(),
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontOptions {
    /// Create the default font options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the font color (ARGB hex string)
    pub fn with_color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = color.into();
        self
    }

    /// Set the font family name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the font size in points
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Set a cell's font from the given options
pub fn apply_font(cell: &mut Cell, options: &FontOptions) {
    let font = cell.get_style_mut().get_font_mut();
    font.set_bold(options.bold);
    font.set_name(options.name.as_str());
    font.set_size(options.size);
    font.get_color_mut().set_argb(options.color.as_str());
}
