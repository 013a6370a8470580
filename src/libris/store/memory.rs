use super::BookStore;
use crate::error::{LibrisError, Result};
use crate::model::{Book, Status};
use uuid::Uuid;

/// In-memory store for testing.
///
/// Mirrors the persistence contract of `FileStore`: a "write" happens after
/// each mutation and can be made to fail, in which case the mutation is
/// rolled back.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, to exercise error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn persist(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(LibrisError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl BookStore for InMemoryStore {
    fn load(&mut self) -> Result<()> {
        Ok(())
    }

    fn add_book(
        &mut self,
        title: String,
        author: String,
        year: i32,
        status: Status,
    ) -> Result<Book> {
        let book = Book::new(title, author, year, status);
        self.books.push(book.clone());
        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }
        Ok(book)
    }

    fn delete_book(&mut self, id: &Uuid) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| &b.id == id)
            .ok_or(LibrisError::BookNotFound(*id))?;

        let book = self.books.remove(pos);
        if let Err(e) = self.persist() {
            self.books.insert(pos, book);
            return Err(e);
        }
        Ok(book)
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn find_by_title(&self, title: &str) -> Result<Vec<Book>> {
        let needle = title.to_lowercase();
        Ok(self
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        let needle = author.to_lowercase();
        Ok(self
            .books
            .iter()
            .filter(|b| b.author.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn find_by_year(&self, year: i32) -> Result<Vec<Book>> {
        Ok(self
            .books
            .iter()
            .filter(|b| b.year == year)
            .cloned()
            .collect())
    }

    fn change_status(&mut self, id: &Uuid, status: Status) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| &b.id == id)
            .ok_or(LibrisError::BookNotFound(*id))?;

        let previous = self.books[pos].status;
        self.books[pos].status = status;
        if let Err(e) = self.persist() {
            self.books[pos].status = previous;
            return Err(e);
        }
        Ok(self.books[pos].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_rolls_back_add() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);

        let err = store
            .add_book("Dune".into(), "Herbert".into(), 1965, Status::Available)
            .unwrap_err();
        assert!(matches!(err, LibrisError::Store(_)));
        assert!(store.list_books().unwrap().is_empty());
    }

    #[test]
    fn write_error_rolls_back_status_change() {
        let mut store = InMemoryStore::new();
        let book = store
            .add_book("Dune".into(), "Herbert".into(), 1965, Status::Available)
            .unwrap();

        store.set_simulate_write_error(true);
        assert!(store.change_status(&book.id, Status::CheckedOut).is_err());

        store.set_simulate_write_error(false);
        assert_eq!(store.list_books().unwrap()[0].status, Status::Available);
    }
}
