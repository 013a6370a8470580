use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::store::BookStore;
use uuid::Uuid;

/// Status legality is checked before the id is resolved, so a bogus status is
/// reported even when the id does not exist.
pub fn run<S: BookStore>(store: &mut S, id: &Uuid, new_status: &str) -> Result<CmdResult> {
    let status: Status = new_status.parse()?;
    let book = store.change_status(id, status)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status of \"{}\" is now {}",
        book.title, book.status
    )));
    result.affected_books.push(book);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::LibrisError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn changes_status_and_reports_it() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, "Dune".into(), "Herbert".into(), 1965, None).unwrap();
        let id = added.affected_books[0].id;

        let result = run(&mut store, &id, "checked_out").unwrap();
        assert_eq!(result.affected_books[0].status, Status::CheckedOut);
        assert_eq!(store.list_books().unwrap()[0].status, Status::CheckedOut);
    }

    #[test]
    fn bogus_status_wins_over_missing_id() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &Uuid::new_v4(), "bogus").unwrap_err();
        assert!(matches!(err, LibrisError::InvalidStatus(_)));
    }

    #[test]
    fn valid_status_with_missing_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &Uuid::new_v4(), "available").unwrap_err();
        assert!(matches!(err, LibrisError::BookNotFound(_)));
    }
}
