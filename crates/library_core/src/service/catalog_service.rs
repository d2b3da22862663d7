//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the book/user id sequences so construction is deterministic.
//! - Combine validated construction with repository storage.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - The service stays storage-agnostic (`R: BookRepository`).
//! - A book that fails validation is never handed to the repository.

use crate::model::book::{Book, BookId, BookValidationError, DigitalEdition};
use crate::model::id_sequence::IdSequence;
use crate::model::user::{User, UserValidationError};
use crate::outcome::Outcome;
use crate::repo::book_repo::{BookPatch, BookRepository};
use log::{info, warn};

/// Use-case wrapper around a `BookRepository`.
#[derive(Debug)]
pub struct CatalogService<R: BookRepository> {
    repo: R,
    book_ids: IdSequence,
    user_ids: IdSequence,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service with both id sequences starting at `0`.
    pub fn new(repo: R) -> Self {
        Self::with_sequences(repo, IdSequence::new(), IdSequence::new())
    }

    /// Creates a service with caller-provided counter state.
    pub fn with_sequences(repo: R, book_ids: IdSequence, user_ids: IdSequence) -> Self {
        Self {
            repo,
            book_ids,
            user_ids,
        }
    }

    /// Read access to the backing repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn book_ids(&self) -> &IdSequence {
        &self.book_ids
    }

    pub fn user_ids(&self) -> &IdSequence {
        &self.user_ids
    }

    /// Builds a printed book without storing it.
    ///
    /// Consumes a book id even when validation fails.
    pub fn new_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Book, BookValidationError> {
        Book::new(&mut self.book_ids, title, author, year)
    }

    /// Builds an e-book without storing it.
    pub fn new_ebook(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        edition: DigitalEdition,
    ) -> Result<Book, BookValidationError> {
        Book::new_ebook(&mut self.book_ids, title, author, year, edition)
    }

    /// Builds a user from the user id sequence.
    pub fn new_user(&mut self, name: impl Into<String>) -> Result<User, UserValidationError> {
        User::new(&mut self.user_ids, name)
    }

    /// Builds and stores a printed book, returning its id.
    ///
    /// # Contract
    /// - Validation failures become `Outcome::Failure`; nothing is stored.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Outcome<BookId> {
        let built = self.new_book(title, author, year);
        self.store(built)
    }

    /// Builds and stores an e-book, returning its id.
    pub fn add_ebook(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        edition: DigitalEdition,
    ) -> Outcome<BookId> {
        let built = self.new_ebook(title, author, year, edition);
        self.store(built)
    }

    pub fn books(&self) -> Outcome<Vec<Book>> {
        self.repo.get_all()
    }

    pub fn book(&self, id: BookId) -> Outcome<Book> {
        self.repo.find_by_id(id)
    }

    pub fn has_duplicate(&self, book: &Book) -> bool {
        self.repo.exists_duplicate(book)
    }

    /// Applies a partial update; repository failures are returned unchanged.
    pub fn update_book(&mut self, id: BookId, patch: BookPatch) -> Outcome {
        self.repo.update(id, patch)
    }

    pub fn remove_book(&mut self, id: BookId) -> Outcome {
        self.repo.remove(id)
    }

    fn store(&mut self, built: Result<Book, BookValidationError>) -> Outcome<BookId> {
        let book = match built {
            Ok(book) => book,
            Err(err) => {
                warn!(
                    "event=book_create module=service status=error reason={} next_id={}",
                    err.code(),
                    self.book_ids.peek()
                );
                return Outcome::fail(err.to_string());
            }
        };

        let id = book.id();
        let kind = book.kind_name();
        self.repo.add(book).map(|()| {
            info!("event=book_create module=service status=ok id={id} kind={kind}");
            id
        })
    }
}
