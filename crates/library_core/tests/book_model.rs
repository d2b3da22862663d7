use library_core::{
    Book, BookFormat, BookValidationError, DigitalEdition, IdSequence, User,
    UserValidationError, MAX_YEAR, MIN_YEAR,
};

#[test]
fn valid_fields_read_back_exactly() {
    let mut ids = IdSequence::new();
    for (title, author, year) in [
        ("Sociedade do Anel", "Tolkien", 1954),
        ("  padded  ", "A. Writer", MIN_YEAR),
        ("Last", "Recent", MAX_YEAR),
    ] {
        let book = Book::new(&mut ids, title, author, year).unwrap();
        assert_eq!(book.title(), title);
        assert_eq!(book.author(), author);
        assert_eq!(book.year(), year);
        assert_eq!(book.format(), &BookFormat::Plain);
    }
}

#[test]
fn invalid_fields_are_rejected() {
    let mut ids = IdSequence::new();

    assert_eq!(
        Book::new(&mut ids, "", "Tolkien", 1954).unwrap_err(),
        BookValidationError::EmptyTitle
    );
    assert_eq!(
        Book::new(&mut ids, "Title", "   ", 1954).unwrap_err(),
        BookValidationError::EmptyAuthor
    );
    assert_eq!(
        Book::new(&mut ids, "Title", "Tolkien", -1).unwrap_err(),
        BookValidationError::YearOutOfRange { year: -1 }
    );
    assert_eq!(
        Book::new(&mut ids, "Title", "Tolkien", MAX_YEAR + 1).unwrap_err(),
        BookValidationError::YearOutOfRange { year: MAX_YEAR + 1 }
    );
}

#[test]
fn rejected_construction_still_consumes_an_id() {
    // Ids are drawn before validation runs; a failed book burns one value.
    let mut ids = IdSequence::new();
    let first = Book::new(&mut ids, "A", "B", 2000).unwrap();
    Book::new(&mut ids, "", "B", 2000).unwrap_err();
    let third = Book::new(&mut ids, "C", "D", 2001).unwrap();

    assert_eq!(first.id(), 0);
    assert_eq!(third.id(), 2);
}

#[test]
fn setters_validate_and_leave_book_unchanged_on_error() {
    let mut ids = IdSequence::new();
    let mut book = Book::new(&mut ids, "Title", "Author", 1999).unwrap();

    assert_eq!(
        book.set_title(" ").unwrap_err(),
        BookValidationError::EmptyTitle
    );
    assert_eq!(
        book.set_year(2026).unwrap_err(),
        BookValidationError::YearOutOfRange { year: 2026 }
    );
    assert_eq!(book.title(), "Title");
    assert_eq!(book.year(), 1999);

    book.set_author("Other").unwrap();
    assert_eq!(book.author(), "Other");
}

#[test]
fn equality_is_content_based() {
    let mut ids = IdSequence::new();
    let first = Book::new(&mut ids, "A", "B", 2000).unwrap();
    let second = Book::new(&mut ids, "A", "B", 2000).unwrap();
    let third = Book::new(&mut ids, "A", "B", 2001).unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn ebook_fields_bypass_validation() {
    let mut ids = IdSequence::new();
    let mut ebook = Book::new_ebook(
        &mut ids,
        "Sociedade do Anel (EBook)",
        "Tolkien",
        1954,
        DigitalEdition::new("", -3.0),
    )
    .unwrap();

    let edition = ebook.as_ebook_mut().unwrap();
    edition.set_file_format("  ");
    edition.set_file_size_mb(f64::MAX);
    assert_eq!(ebook.as_ebook().unwrap().file_format, "  ");

    assert_eq!(
        Book::new_ebook(&mut ids, "", "Tolkien", 1954, DigitalEdition::new("PDF", 1.0))
            .unwrap_err(),
        BookValidationError::EmptyTitle
    );
}

#[test]
fn display_and_download_info_follow_book_kind() {
    let mut ids = IdSequence::new();
    let plain = Book::new(&mut ids, "As Duas Torres", "Tolkien", 1954).unwrap();
    let ebook = Book::new_ebook(
        &mut ids,
        "O Retorno do Rei",
        "Tolkien",
        1955,
        DigitalEdition::new("PDF", 1.23),
    )
    .unwrap();

    assert_eq!(plain.to_string(), "0: \"As Duas Torres\" by Tolkien (1954)");
    assert_eq!(
        ebook.to_string(),
        "1: \"O Retorno do Rei\" by Tolkien (1955) [PDF | 1.23 MB]"
    );
    assert_eq!(plain.kind_name(), "Book");
    assert_eq!(ebook.kind_name(), "EBook");
    assert_eq!(plain.download_info(), None);
    assert_eq!(
        ebook.download_info().as_deref(),
        Some("Download Info: 'O Retorno do Rei' (PDF | 1.23 MB)")
    );
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let ebook = Book::with_id(7, "Dune", "Herbert", 1965)
        .unwrap()
        .with_format(BookFormat::Electronic(DigitalEdition::new("EPUB", 2.5)));

    let json = serde_json::to_value(&ebook).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["format"]["kind"], "electronic");
    assert_eq!(json["format"]["file_format"], "EPUB");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.id(), 7);
    assert_eq!(decoded.as_ebook(), ebook.as_ebook());
}

#[test]
fn deserialize_rejects_invalid_book_and_defaults_format() {
    let invalid = serde_json::json!({
        "id": 1,
        "title": "Old",
        "author": "Someone",
        "year": 2100
    });
    let err = serde_json::from_value::<Book>(invalid).unwrap_err();
    assert!(
        err.to_string().contains("must be between 0 and 2025"),
        "unexpected error: {err}"
    );

    let plain = serde_json::json!({
        "id": 2,
        "title": "New",
        "author": "Someone",
        "year": 2020
    });
    let book: Book = serde_json::from_value(plain).unwrap();
    assert!(!book.is_ebook());
}

#[test]
fn users_use_an_independent_sequence() {
    let mut book_ids = IdSequence::starting_at(10);
    let mut user_ids = IdSequence::new();
    Book::new(&mut book_ids, "A", "B", 2000).unwrap();

    let mut user = User::new(&mut user_ids, "Ana").unwrap();
    assert_eq!(user.id(), 0);
    assert_eq!(user.to_string(), "0: \"Ana\"");

    assert_eq!(
        user.set_name("\n").unwrap_err(),
        UserValidationError::EmptyName
    );
    assert_eq!(user.name(), "Ana");

    assert_eq!(
        User::new(&mut user_ids, "").unwrap_err(),
        UserValidationError::EmptyName
    );
    assert_eq!(user_ids.peek(), 2);

    let err = serde_json::from_value::<User>(serde_json::json!({"id": 3, "name": " "}))
        .unwrap_err();
    assert!(err.to_string().contains("Name cannot be empty."));
}

#[test]
fn exhausted_sequence_rejects_new_entities_without_reusing_ids() {
    let mut book_ids = IdSequence::starting_at(u32::MAX - 1);
    let last = Book::new(&mut book_ids, "Last", "Author", 2000).unwrap();
    assert_eq!(last.id(), u32::MAX - 1);

    let err = Book::new(&mut book_ids, "Next", "Author", 2000).unwrap_err();
    assert_eq!(err, BookValidationError::IdsExhausted);
    let err = Book::new_ebook(
        &mut book_ids,
        "Next",
        "Author",
        2000,
        DigitalEdition::new("PDF", 1.0),
    )
    .unwrap_err();
    assert_eq!(err, BookValidationError::IdsExhausted);

    let mut user_ids = IdSequence::starting_at(u32::MAX);
    assert_eq!(
        User::new(&mut user_ids, "Ana").unwrap_err(),
        UserValidationError::IdsExhausted
    );
    assert_eq!(user_ids.peek(), u32::MAX);
}
