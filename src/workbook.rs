//! Workbook creation, loading, and saving
//!
//! Thin forwarding helpers around the `umya_spreadsheet` reader/writer. A
//! workbook is created or loaded here, mutated in place through the styling
//! helpers, and written back out with [`save_workbook`].

use std::path::Path;

use umya_spreadsheet::Spreadsheet;

use crate::error::{Error, Result};

/// Create a new blank workbook with a single empty sheet
pub fn create_workbook() -> Spreadsheet {
    umya_spreadsheet::new_file()
}

/// Load a workbook from an XLSX file, preserving formulas
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
    let path = path.as_ref();
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded workbook from {}", path.display());
    Ok(book)
}

/// Load a workbook from an XLSX file, resolving formula cells to their
/// cached values
///
/// Formulas are stripped after loading, so a formula cell reports an empty
/// formula and its value is the result cached in the file. Use this when a
/// caller only needs computed data and should never see formula strings.
pub fn load_workbook_data_only<P: AsRef<Path>>(path: P) -> Result<Spreadsheet> {
    let mut book = load_workbook(path)?;
    for sheet in book.get_sheet_collection_mut().iter_mut() {
        for cell in sheet.get_cell_collection_mut() {
            if !cell.get_formula().is_empty() {
                // The cached result lives in the raw value; dropping the
                // formula leaves only that value behind.
                cell.get_cell_value_mut().remove_formula();
            }
        }
    }
    Ok(book)
}

/// Write a workbook to an XLSX file
pub fn save_workbook<P: AsRef<Path>>(book: &Spreadsheet, path: P) -> Result<()> {
    let path = path.as_ref();
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("saved workbook to {}", path.display());
    Ok(())
}
