//! Tests that each styling helper sets the expected cell attribute

use pretty_assertions::assert_eq;
use umya_spreadsheet::PatternValues;
use xlsx_kit::{
    add_comment, apply_borders, apply_center_alignment, apply_currency_format, apply_fill,
    apply_font, apply_header_cell, apply_number_format, create_workbook, default_side, side,
    Border, CellBorders, FontOptions, HorizontalAlignmentValues, DEFAULT_NUMBER_FORMAT,
};

#[test]
fn test_apply_font_defaults() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("A1");

    apply_font(cell, &FontOptions::default());

    let font = cell.get_style().get_font().expect("A1 should have a font");
    assert!(!*font.get_bold());
    assert_eq!(font.get_name(), "Arial");
    assert_eq!(*font.get_size(), 10.0);
    assert_eq!(font.get_color().get_argb(), "00000000");
}

#[test]
fn test_apply_font_custom() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("A1");

    let options = FontOptions::new()
        .with_bold(true)
        .with_color("FF0000FF")
        .with_name("Courier New")
        .with_size(14.0);
    apply_font(cell, &options);

    let font = cell.get_style().get_font().expect("A1 should have a font");
    assert!(*font.get_bold());
    assert_eq!(font.get_name(), "Courier New");
    assert_eq!(*font.get_size(), 14.0);
    assert_eq!(font.get_color().get_argb(), "FF0000FF");
}

#[test]
fn test_apply_fill_is_solid() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("B2");

    apply_fill(cell, "FFFFCC00");

    let fill = cell.get_style().get_fill().expect("B2 should have a fill");
    let pattern = fill
        .get_pattern_fill()
        .expect("B2 fill should be a pattern fill");
    assert_eq!(pattern.get_pattern_type(), &PatternValues::Solid);
    let foreground = pattern
        .get_foreground_color()
        .expect("B2 fill should have a foreground color");
    assert_eq!(foreground.get_argb(), "FFFFCC00");
}

#[test]
fn test_apply_center_alignment() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("C1");

    let applied = apply_center_alignment(cell);

    assert_eq!(applied.get_horizontal(), &HorizontalAlignmentValues::Center);
    let alignment = cell
        .get_style()
        .get_alignment()
        .expect("C1 should have an alignment");
    assert_eq!(
        alignment.get_horizontal(),
        &HorizontalAlignmentValues::Center
    );
}

#[test]
fn test_apply_borders_bottom_only() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("D4");

    apply_borders(
        cell,
        &CellBorders::new().with_bottom(side(Border::BORDER_THIN, "FF0000")),
    );

    let borders = cell
        .get_style()
        .get_borders()
        .expect("D4 should have borders");
    assert_eq!(borders.get_bottom().get_border_style(), Border::BORDER_THIN);
    assert_eq!(borders.get_bottom().get_color().get_argb(), "FF0000");
    assert_eq!(borders.get_left().get_border_style(), Border::BORDER_NONE);
    assert_eq!(borders.get_right().get_border_style(), Border::BORDER_NONE);
    assert_eq!(borders.get_top().get_border_style(), Border::BORDER_NONE);
}

#[test]
fn test_apply_header_cell() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("A1");
    cell.set_value("Header");

    apply_header_cell(cell);

    let style = cell.get_style();

    // Centered
    let alignment = style.get_alignment().expect("header should be aligned");
    assert_eq!(
        alignment.get_horizontal(),
        &HorizontalAlignmentValues::Center
    );

    // Bottom border only, medium black
    let borders = style.get_borders().expect("header should have borders");
    assert_eq!(
        borders.get_bottom().get_border_style(),
        Border::BORDER_MEDIUM
    );
    assert_eq!(borders.get_bottom().get_color().get_argb(), "000000");
    assert_eq!(borders.get_left().get_border_style(), Border::BORDER_NONE);
    assert_eq!(borders.get_right().get_border_style(), Border::BORDER_NONE);
    assert_eq!(borders.get_top().get_border_style(), Border::BORDER_NONE);

    // Bold, library-default face
    let font = style.get_font().expect("header should have a font");
    assert!(*font.get_bold());
}

#[test]
fn test_default_side_is_medium_black() {
    let side = default_side();
    assert_eq!(side.get_border_style(), Border::BORDER_MEDIUM);
    assert_eq!(side.get_color().get_argb(), "000000");
}

#[test]
fn test_add_comment() {
    let mut book = create_workbook();
    let sheet = book.get_active_sheet_mut();

    add_comment(sheet, "B2", "Check this value", "reviewer");

    let comments = sheet.get_comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].get_author(), "reviewer");
    assert_eq!(comments[0].get_coordinate().get_coordinate(), "B2");
    // The comment body has no public value accessor; check it through the
    // Debug representation
    let text = format!("{:?}", comments[0].get_text());
    assert!(text.contains("Check this value"));
}

#[test]
fn test_apply_number_format() {
    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("E5");
    cell.set_value_number(0.125);

    apply_number_format(cell, "0.00%");

    let format = cell
        .get_style()
        .get_number_format()
        .expect("E5 should have a number format");
    assert_eq!(format.get_format_code(), "0.00%");
}

#[test]
fn test_apply_currency_format_default() {
    assert_eq!(DEFAULT_NUMBER_FORMAT, "R$ #,##0.00");

    let mut book = create_workbook();
    let cell = book.get_active_sheet_mut().get_cell_mut("E6");
    cell.set_value_number(1234.5);

    apply_currency_format(cell);

    let format = cell
        .get_style()
        .get_number_format()
        .expect("E6 should have a number format");
    assert_eq!(format.get_format_code(), "R$ #,##0.00");
}
