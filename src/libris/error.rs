use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Book not found: {0}")]
    BookNotFound(Uuid),

    #[error("Invalid status \"{0}\" (expected \"available\" or \"checked_out\")")]
    InvalidStatus(String),

    #[error("Corrupt catalog file {}: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write catalog file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
