use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Command-line catalog for a small home library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the catalog file (defaults to the user data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Year of publication
        year: i32,

        /// Initial status (available | checked_out, defaults to available)
        #[arg(long)]
        status: Option<String>,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Remove a book by id
    #[command(alias = "rm")]
    Remove {
        /// Id of the book to remove
        id: String,
    },

    /// Find books by title, author, or year
    Find {
        /// Substring of the title (case-insensitive)
        #[arg(short, long)]
        title: Option<String>,

        /// Substring of the author (case-insensitive)
        #[arg(short, long)]
        author: Option<String>,

        /// Exact year of publication
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Change the status of a book (available | checked_out)
    Status {
        /// Id of the book
        id: String,

        /// New status
        status: String,
    },
}
