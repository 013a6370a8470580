use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::store::BookStore;

/// The store assigns the id; callers are expected to have validated title,
/// author, and year bounds already.
pub fn run<S: BookStore>(
    store: &mut S,
    title: String,
    author: String,
    year: i32,
    status: Option<Status>,
) -> Result<CmdResult> {
    let book = store.add_book(title, author, year, status.unwrap_or_default())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" with id {}",
        book.title, book.id
    )));
    result.affected_books.push(book);
    Ok(result)
}
