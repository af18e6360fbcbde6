use bookshelf_core::{
    Book, BookRepository, CatalogError, CatalogService, InMemoryBookRepository,
};

fn titles(repo: &InMemoryBookRepository) -> Vec<String> {
    repo.list_books()
        .unwrap()
        .iter()
        .map(|book| book.title.clone())
        .collect()
}

#[test]
fn distinct_adds_grow_catalog_and_duplicates_do_not() {
    let mut repo = InMemoryBookRepository::new();
    for id in [3, 1, 7, 0] {
        repo.add_book(Book::new(id, format!("title {id}"), "author", 2000))
            .unwrap();
    }
    assert_eq!(repo.len(), 4);

    let err = repo
        .add_book(Book::new(7, "dupe", "author", 2000))
        .unwrap_err();
    assert_eq!(err, CatalogError::AlreadyExists(7));
    assert_eq!(repo.len(), 4);
}

#[test]
fn duplicate_add_keeps_first_record_only() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(1, "A", "B", 2000)).unwrap();
    let err = repo.add_book(Book::new(1, "C", "D", 2001)).unwrap_err();

    assert_eq!(err, CatalogError::AlreadyExists(1));
    assert_eq!(repo.list_books().unwrap(), &[Book::new(1, "A", "B", 2000)]);
}

#[test]
fn list_preserves_insertion_order() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(9, "first", "a", 1990)).unwrap();
    repo.add_book(Book::new(2, "second", "a", 1991)).unwrap();
    repo.add_book(Book::new(5, "third", "a", 1992)).unwrap();

    assert_eq!(titles(&repo), vec!["first", "second", "third"]);
}

#[test]
fn list_on_empty_catalog_signals_empty() {
    let repo = InMemoryBookRepository::new();
    assert_eq!(repo.list_books().unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn update_replaces_fields_in_place() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(1, "one", "a", 2000)).unwrap();
    repo.add_book(Book::new(2, "two", "b", 2001)).unwrap();
    repo.add_book(Book::new(3, "three", "c", 2002)).unwrap();

    repo.update_book(2, "deux", "bee", 1850).unwrap();

    let books = repo.list_books().unwrap();
    assert_eq!(books[1], Book::new(2, "deux", "bee", 1850));
    assert_eq!(titles(&repo), vec!["one", "deux", "three"]);
}

#[test]
fn update_missing_id_returns_not_found_and_leaves_catalog() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(1, "one", "a", 2000)).unwrap();

    let err = repo.update_book(42, "x", "y", 1999).unwrap_err();
    assert_eq!(err, CatalogError::NotFound(42));
    assert_eq!(repo.list_books().unwrap(), &[Book::new(1, "one", "a", 2000)]);
}

#[test]
fn update_with_identical_values_is_a_no_op() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(4, "Dune", "Herbert", 1965)).unwrap();
    let before = repo.list_books().unwrap().to_vec();

    repo.update_book(4, "Dune", "Herbert", 1965).unwrap();

    assert_eq!(repo.list_books().unwrap(), before.as_slice());
}

#[test]
fn delete_removes_record_and_reports_missing_ids() {
    let mut repo = InMemoryBookRepository::new();
    repo.add_book(Book::new(1, "one", "a", 2000)).unwrap();
    repo.add_book(Book::new(2, "two", "b", 2001)).unwrap();

    let removed = repo.delete_book(2).unwrap();
    assert_eq!(removed.id, 2);
    assert!(!repo.contains(2));
    assert!(repo.list_books().unwrap().iter().all(|book| book.id != 2));

    assert_eq!(repo.delete_book(2).unwrap_err(), CatalogError::NotFound(2));
}

#[test]
fn delete_from_empty_catalog_signals_empty() {
    let mut repo = InMemoryBookRepository::new();
    assert_eq!(repo.delete_book(1).unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn deleting_every_record_empties_catalog() {
    let mut repo = InMemoryBookRepository::new();
    for id in 1..=3 {
        repo.add_book(Book::new(id, "t", "a", 2000)).unwrap();
    }
    for id in [2, 1, 3] {
        repo.delete_book(id).unwrap();
    }

    assert!(repo.is_empty());
    assert_eq!(repo.list_books().unwrap_err(), CatalogError::EmptyCatalog);
    assert_eq!(repo.delete_book(1).unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn service_wraps_store_calls() {
    let mut service = CatalogService::new(InMemoryBookRepository::new());
    service.add_book(1, "A", "B", 2000).unwrap();
    assert_eq!(
        service.add_book(1, "C", "D", 2001).unwrap_err(),
        CatalogError::AlreadyExists(1)
    );

    assert!(service.contains(1));
    service.update_book(1, "A2", "B2", 2002).unwrap();
    assert_eq!(service.list_books().unwrap()[0].title, "A2");

    let removed = service.delete_book(1).unwrap();
    assert_eq!(removed, Book::new(1, "A2", "B2", 2002));
    assert!(service.is_empty());
    assert_eq!(service.shutdown(), 0);
}
