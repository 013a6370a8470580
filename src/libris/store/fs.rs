use super::BookStore;
use crate::error::{LibrisError, Result};
use crate::model::{Book, Status};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl FileStore {
    /// Creates a store over the given catalog file. The file is not touched
    /// until [`BookStore::load`] or the first mutation.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            books: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            // parent() is Some("") for bare relative filenames
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| LibrisError::Persistence {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }
        Ok(())
    }

    /// Rewrite the whole catalog file from the in-memory sequence.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// catalog, so a failure mid-write never truncates the existing file.
    fn persist(&self) -> Result<()> {
        self.ensure_parent_dir()?;

        let content =
            serde_json::to_string_pretty(&self.books).map_err(LibrisError::Serialization)?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp_file = dir.join(format!(".catalog-{}.tmp", Uuid::new_v4()));

        fs::write(&tmp_file, content).map_err(|source| LibrisError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        fs::rename(&tmp_file, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp_file);
            LibrisError::Persistence {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(count = self.books.len(), path = %self.path.display(), "catalog persisted");
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no catalog file, starting empty");
            self.books.clear();
            return Ok(());
        }

        let content = fs::read_to_string(&self.path).map_err(LibrisError::Io)?;
        // A file that exists but does not parse is an error, not an empty
        // catalog: prior data must never be silently discarded.
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|source| LibrisError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        debug!(count = books.len(), path = %self.path.display(), "catalog loaded");
        self.books = books;
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
        debug!(id = %book.id, title = %book.title, "book added");
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
        debug!(id = %book.id, title = %book.title, "book deleted");
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
        debug!(id = %id, status = %status, "status changed");
        Ok(self.books[pos].clone())
    }
}
