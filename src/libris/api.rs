//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all libris operations, regardless of the UI being used.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured `Result<CmdResult>` values. Business logic belongs in
//! `commands/*.rs`; presentation belongs to the client.
//!
//! `LibrisApi<S: BookStore>` is generic over the storage backend:
//! - Production: `LibrisApi<FileStore>`
//! - Testing: `LibrisApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Status;
use crate::store::BookStore;
use uuid::Uuid;

/// The main API facade for libris operations.
///
/// All UI clients should interact through this API. The store must already be
/// loaded (see [`BookStore::load`]) before the facade is handed operations.
pub struct LibrisApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> LibrisApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: i32,
        status: Option<Status>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, year, status)
    }

    pub fn remove_book(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_books(&self, query: &FindQuery) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, query)
    }

    pub fn change_status(&mut self, id: &Uuid, new_status: &str) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, new_status)
    }
}

pub use commands::find::FindQuery;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_facade() {
        let mut api = LibrisApi::new(InMemoryStore::new());
        let added = api
            .add_book("Dune".into(), "Herbert".into(), 1965, None)
            .unwrap();
        let id = added.affected_books[0].id;

        api.change_status(&id, "checked_out").unwrap();
        let found = api.find_books(&FindQuery::Year(1965)).unwrap();
        assert_eq!(found.listed_books[0].status, Status::CheckedOut);

        api.remove_book(&id).unwrap();
        assert!(api.list_books().unwrap().listed_books.is_empty());
    }
}
