//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The [`BookStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, sync, etc.) without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole catalog lives in one JSON array file (`library.json`)
//!   - Every mutation rewrites the file via a temp file + atomic rename
//!   - Loaded once at startup; the file is the sole source of truth between runs
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures to exercise error paths
//!
//! ## Storage Format
//!
//! For `FileStore`, a JSON array in insertion order:
//! ```text
//! [{"id":"…","title":"Dune","author":"Herbert","year":1965,"status":"available"}]
//! ```
//!
//! ## Persistence Contract
//!
//! Mutating operations (`add_book`, `delete_book`, `change_status`) persist
//! before returning success. If persisting fails, the in-memory mutation is
//! rolled back and the error returned, so callers never observe a state that
//! is not on disk. Read operations never touch the backing medium.

use crate::error::Result;
use crate::model::{Book, Status};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog storage.
///
/// Implementations own the ordered book sequence and must keep it consistent
/// with their backing medium across mutations.
pub trait BookStore {
    /// Replace the in-memory catalog with whatever the backing medium holds.
    ///
    /// Called once at startup. An absent backing file is an empty catalog,
    /// not an error; an unreadable or malformed one is.
    fn load(&mut self) -> Result<()>;

    /// Append a new book with a freshly generated id and persist.
    /// Returns the stored book, id included.
    fn add_book(&mut self, title: String, author: String, year: i32, status: Status)
        -> Result<Book>;

    /// Remove the book with the given id and persist. Returns the removed book.
    fn delete_book(&mut self, id: &Uuid) -> Result<Book>;

    /// All books, in insertion order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Case-insensitive substring match on the title.
    fn find_by_title(&self, title: &str) -> Result<Vec<Book>>;

    /// Case-insensitive substring match on the author.
    fn find_by_author(&self, author: &str) -> Result<Vec<Book>>;

    /// Exact match on the publication year.
    fn find_by_year(&self, year: i32) -> Result<Vec<Book>>;

    /// Set the status of the book with the given id and persist.
    /// Returns the updated book.
    fn change_status(&mut self, id: &Uuid, status: Status) -> Result<Book>;
}
