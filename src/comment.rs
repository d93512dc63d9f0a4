//! Cell comment helpers
//!
//! Comments are owned by the worksheet in the underlying library, so the
//! helper takes the sheet plus a cell coordinate rather than a cell handle.

use umya_spreadsheet::{Comment, Worksheet};

/// Attach a plain-text comment with an author to the cell at `coordinate`
/// (e.g. `"B2"`)
pub fn add_comment<T, A>(sheet: &mut Worksheet, coordinate: &str, text: T, author: A)
where
    T: Into<String>,
    A: Into<String>,
{
    let mut comment = Comment::default();
    comment.get_coordinate_mut().set_coordinate(coordinate);
    comment.set_author(author.into());
    comment.get_text_mut().set_text_string(text.into());
    sheet.add_comments(comment);
}
