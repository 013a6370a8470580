use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;
use uuid::Uuid;

pub fn run<S: BookStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let book = store.delete_book(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed \"{}\" ({})",
        book.title, book.id
    )));
    result.affected_books.push(book);
    Ok(result)
}
