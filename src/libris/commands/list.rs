use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let books = store.list_books()?;
    Ok(CmdResult::default().with_listed_books(books))
}
