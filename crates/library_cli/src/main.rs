//! Catalog demonstration entry point.
//!
//! # Responsibility
//! - Wire `library_core` together end to end for a quick local sanity check.
//! - Keep output deterministic; ids always start at `0`.

use library_core::{
    init_logging, Book, BookPatch, CatalogService, DigitalEdition, InMemoryBookRepository,
    LoggingConfig, Outcome,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("library_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    println!("library_core version={}", library_core::core_version());
    let log_dir = std::env::temp_dir().join("library_cli").join("logs");
    let config = LoggingConfig::with_default_level(&log_dir)?;
    init_logging(&config)?;
    println!("logs: {}", config.log_dir().display());
    let mut catalog = CatalogService::new(InMemoryBookRepository::new());

    println!("=== books ===");
    let first = catalog.add_book("Sociedade do Anel", "Tolkien", 1954).into_result()?;
    let second = catalog.add_book("As Duas Torres", "Tolkien", 1954).into_result()?;
    let third = catalog.add_book("O Retorno do Rei", "Tolkien", 1955).into_result()?;
    for book in catalog.books().into_result()? {
        println!("-> {} ({})", book.title(), book.year());
    }

    println!();
    println!("=== equality and hashing ===");
    let first_book = catalog.book(first).into_result()?;
    let second_book = catalog.book(second).into_result()?;
    let third_book = catalog.book(third).into_result()?;
    println!("book {first} == book {second} ? {}", first_book == second_book);
    for book in [&first_book, &second_book, &third_book] {
        println!("hash {}: {}", book.id(), content_hash(book));
    }

    println!();
    println!("=== update and remove ===");
    report(
        "update",
        catalog.update_book(second, BookPatch::new().title("Changed Title")),
    );
    let updated = catalog.book(second).into_result()?;
    println!("updated book: {updated}");
    report("remove", catalog.remove_book(second));
    report("remove again", catalog.remove_book(second));

    println!();
    println!("=== mixed catalog ===");
    let ebook_id = catalog
        .add_ebook(
            "Sociedade do Anel (EBook)",
            "Tolkien",
            1954,
            DigitalEdition::new("PDF", 1.23),
        )
        .into_result()?;
    for book in catalog.books().into_result()? {
        println!("[{}] {}", book.kind_name(), book.title());
    }
    if let Some(info) = catalog.book(ebook_id).into_result()?.download_info() {
        println!("{info}");
    }

    println!();
    println!("=== rejected input ===");
    report("add invalid year", catalog.add_book("Future", "Nobody", 3000));

    Ok(())
}

fn report<T>(label: &str, outcome: Outcome<T>) {
    match outcome.error_message() {
        None => println!("{label}: ok"),
        Some(message) => println!("{label}: failed ({message})"),
    }
}

fn content_hash(book: &Book) -> u64 {
    let mut hasher = DefaultHasher::new();
    book.hash(&mut hasher);
    hasher.finish()
}
