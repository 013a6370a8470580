use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

/// The three search modes: substring on title or author, exact on year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindQuery {
    Title(String),
    Author(String),
    Year(i32),
}

pub fn run<S: BookStore>(store: &S, query: &FindQuery) -> Result<CmdResult> {
    let books = match query {
        FindQuery::Title(term) => store.find_by_title(term)?,
        FindQuery::Author(term) => store.find_by_author(term)?,
        FindQuery::Year(year) => store.find_by_year(*year)?,
    };
    Ok(CmdResult::default().with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Dune".into(), "Herbert".into(), 1965, None).unwrap();
        add::run(&mut store, "Solaris".into(), "Lem".into(), 1961, None).unwrap();
        store
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let store = seeded_store();
        for needle in ["dune", "DUNE", "Dune"] {
            let result = run(&store, &FindQuery::Title(needle.into())).unwrap();
            assert_eq!(result.listed_books.len(), 1, "needle {:?}", needle);
            assert_eq!(result.listed_books[0].title, "Dune");
        }
    }

    #[test]
    fn author_search_matches_substrings() {
        let store = seeded_store();
        let result = run(&store, &FindQuery::Author("herb".into())).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].author, "Herbert");
    }

    #[test]
    fn year_search_is_exact() {
        let store = seeded_store();
        let result = run(&store, &FindQuery::Year(1961)).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "Solaris");

        assert!(run(&store, &FindQuery::Year(1962))
            .unwrap()
            .listed_books
            .is_empty());
    }
}
