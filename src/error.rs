//! Error types for xlsx-kit

use std::path::PathBuf;

use thiserror::Error;
use umya_spreadsheet::XlsxError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading or saving workbooks
///
/// Everything else in this crate is an in-memory attribute assignment and
/// cannot fail; only the I/O entry points return a [`Result`].
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a workbook from disk failed
    #[error("failed to load workbook from {}: {source}", .path.display())]
    Load {
        /// Path that was being read
        path: PathBuf,
        /// Underlying spreadsheet library error
        source: XlsxError,
    },

    /// Writing a workbook to disk failed
    #[error("failed to save workbook to {}: {source}", .path.display())]
    Save {
        /// Path that was being written
        path: PathBuf,
        /// Underlying spreadsheet library error
        source: XlsxError,
    },
}
