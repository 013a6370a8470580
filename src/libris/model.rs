use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::LibrisError;

/// Availability of a book. Exactly two values exist; anything else read from
/// disk is a deserialization failure, not a third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = LibrisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Status::Available),
            "checked_out" => Ok(Status::CheckedOut),
            other => Err(LibrisError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Book {
    /// The id is assigned here and never changes afterwards.
    pub fn new(title: String, author: String, year: i32, status: Status) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            year,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_both_values() {
        assert_eq!("available".parse::<Status>().unwrap(), Status::Available);
        assert_eq!("checked_out".parse::<Status>().unwrap(), Status::CheckedOut);
    }

    #[test]
    fn status_rejects_anything_else() {
        let err = "bogus".parse::<Status>().unwrap_err();
        assert!(matches!(err, LibrisError::InvalidStatus(s) if s == "bogus"));
    }

    #[test]
    fn status_display_matches_wire_format() {
        assert_eq!(Status::Available.to_string(), "available");
        assert_eq!(Status::CheckedOut.to_string(), "checked_out");
    }

    #[test]
    fn book_serializes_with_exactly_five_keys() {
        let book = Book::new("Dune".into(), "Herbert".into(), 1965, Status::Available);
        let value = serde_json::to_value(&book).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["title"], "Dune");
        assert_eq!(obj["author"], "Herbert");
        assert_eq!(obj["year"], 1965);
        assert_eq!(obj["status"], "available");
        assert!(obj["id"].is_string());
    }

    #[test]
    fn new_books_get_distinct_ids() {
        let a = Book::new("A".into(), "B".into(), 2000, Status::Available);
        let b = Book::new("A".into(), "B".into(), 2000, Status::Available);
        assert_ne!(a.id, b.id);
    }
}
