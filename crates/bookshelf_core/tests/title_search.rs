use bookshelf_core::{
    Book, BookRepository, CatalogError, CatalogService, InMemoryBookRepository, TitleQuery,
};

fn seeded_repo() -> InMemoryBookRepository {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(1, "The Go Programming Language", "Donovan", 2015))
        .unwrap();
    repo.add_book(Book::new(2, "Effective Java", "Bloch", 2018))
        .unwrap();
    repo
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let repo = seeded_repo();

    let go = repo.search_by_title(&TitleQuery::new("go")).unwrap();
    assert_eq!(go.total, 1);
    assert_eq!(go.items[0].id, 1);

    let java = repo.search_by_title(&TitleQuery::new("JAVA")).unwrap();
    assert_eq!(java.total, 1);
    assert_eq!(java.items[0].id, 2);
}

#[test]
fn blank_query_returns_empty_query() {
    let repo = seeded_repo();
    assert_eq!(
        repo.search_by_title(&TitleQuery::new("")).unwrap_err(),
        CatalogError::EmptyQuery
    );
    assert_eq!(
        repo.search_by_title(&TitleQuery::new("   ")).unwrap_err(),
        CatalogError::EmptyQuery
    );
}

#[test]
fn search_on_empty_catalog_signals_empty_catalog() {
    let repo = InMemoryBookRepository::new();
    assert_eq!(
        repo.search_by_title(&TitleQuery::new("dune")).unwrap_err(),
        CatalogError::EmptyCatalog
    );
}

#[test]
fn search_returns_all_matches_in_insertion_order() {
    let mut service = CatalogService::new(InMemoryBookRepository::new());
    service.add_book(1, "Dune", "Herbert", 1965).unwrap();
    service.add_book(3, "Neuromancer", "Gibson", 1984).unwrap();
    service.add_book(2, "Dune Messiah", "Herbert", 1969).unwrap();

    let matches = service.search_titles("dune").unwrap();
    assert_eq!(matches.total, 2);
    let ids: Vec<u32> = matches.items.iter().map(|book| book.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn zero_hits_is_distinct_from_errors() {
    let repo = seeded_repo();
    let matches = repo.search_by_title(&TitleQuery::new("rust")).unwrap();
    assert_eq!(matches.total, 0);
    assert!(matches.items.is_empty());
}

#[test]
fn search_does_not_mutate_catalog() {
    let repo = seeded_repo();
    let before = repo.list_books().unwrap().to_vec();
    let _ = repo.search_by_title(&TitleQuery::new("e")).unwrap();
    assert_eq!(repo.list_books().unwrap(), before.as_slice());
}
