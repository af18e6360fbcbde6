use bookshelf_core::Book;

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new(12, "Dune", "Frank Herbert", 1965);

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 12);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Frank Herbert");
    assert_eq!(json["publication_year"], 1965);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn deserialize_rejects_negative_id() {
    let value = serde_json::json!({
        "id": -1,
        "title": "Dune",
        "author": "Frank Herbert",
        "publication_year": 1965
    });

    assert!(serde_json::from_value::<Book>(value).is_err());
}
