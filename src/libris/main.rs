use chrono::{Datelike, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use libris::api::{CmdMessage, FindQuery, LibrisApi, MessageLevel};
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::logging::{init_logging, Verbosity};
use libris::model::{Book, Status};
use libris::store::fs::FileStore;
use libris::store::BookStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LibrisApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    init_logging(verbosity);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            status,
        }) => handle_add(&mut ctx, title, author, year, status),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, &id),
        Some(Commands::Find {
            title,
            author,
            year,
        }) => handle_find(&ctx, title, author, year),
        Some(Commands::Status { id, status }) => handle_status(&mut ctx, &id, &status),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let catalog_file = resolve_catalog_file(cli)?;

    let mut store = FileStore::new(catalog_file);
    // One load at startup; a corrupt catalog aborts the run here instead of
    // being treated as an empty library.
    store.load()?;

    Ok(AppContext {
        api: LibrisApi::new(store),
    })
}

fn resolve_catalog_file(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }

    let data_dir = match std::env::var_os("LIBRIS_DATA") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "libris", "libris")
            .ok_or_else(|| LibrisError::Store("Could not determine a data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = LibrisConfig::load(&data_dir)?;
    Ok(data_dir.join(config.catalog_file()))
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: i32,
    status: Option<String>,
) -> Result<()> {
    let title = title.trim().to_string();
    let author = author.trim().to_string();

    if title.is_empty() {
        return Err(LibrisError::Input("Title cannot be empty".into()));
    }
    if author.is_empty() {
        return Err(LibrisError::Input("Author cannot be empty".into()));
    }

    let current_year = Utc::now().year();
    if year < 1 || year > current_year {
        return Err(LibrisError::Input(format!(
            "Year must be between 1 and {}",
            current_year
        )));
    }

    let status: Option<Status> = status.as_deref().map(str::parse).transpose()?;

    let result = ctx.api.add_book(title, author, year, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.api.remove_book(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_find(
    ctx: &AppContext,
    title: Option<String>,
    author: Option<String>,
    year: Option<i32>,
) -> Result<()> {
    let query = match (title, author, year) {
        (Some(t), None, None) => FindQuery::Title(t),
        (None, Some(a), None) => FindQuery::Author(a),
        (None, None, Some(y)) => FindQuery::Year(y),
        _ => {
            return Err(LibrisError::Input(
                "Give exactly one of --title, --author, or --year".into(),
            ))
        }
    };

    let result = ctx.api.find_books(&query)?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, id: &str, status: &str) -> Result<()> {
    let id = parse_id(id)?;
    let result = ctx.api.change_status(&id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn parse_id(s: &str) -> Result<Uuid> {
    Uuid::parse_str(s.trim())
        .map_err(|_| LibrisError::Input(format!("\"{}\" is not a valid book id", s)))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

// Width of the longest status value, "checked_out"
const STATUS_WIDTH: usize = 11;

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let title_width = books.iter().map(|b| b.title.width()).max().unwrap_or(0);
    let author_width = books.iter().map(|b| b.author.width()).max().unwrap_or(0);

    for book in books {
        let status_colored = match book.status {
            Status::Available => book.status.as_str().green(),
            Status::CheckedOut => book.status.as_str().yellow(),
        };

        // Pad around the colored text, not through it: ANSI escapes would
        // throw off format-width alignment.
        let status_pad = STATUS_WIDTH.saturating_sub(book.status.as_str().len());

        println!(
            "{}{}  {}{}  {}  {}{}  {}",
            book.title.bold(),
            " ".repeat(title_width - book.title.width()),
            book.author,
            " ".repeat(author_width - book.author.width()),
            book.year,
            status_colored,
            " ".repeat(status_pad),
            book.id.to_string().dimmed(),
        );
    }
}
