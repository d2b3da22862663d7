//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the catalog's books keyed by `BookId`.
//! - Reject identity collisions on insert and content duplicates on update.
//!
//! # Invariants
//! - The map key always equals the stored book's `id()`.
//! - Operational failures come back as `Outcome::Failure`, never panics.
//! - Mutations fully commit or leave the store unchanged.

use crate::model::book::{Book, BookId, BookValidationError};
use crate::outcome::Outcome;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operational repository errors, surfaced to callers as failure messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(BookId),
    AlreadyExists(BookId),
    /// Another stored book has the same title, author and year.
    Duplicate { conflicting_id: BookId },
    Validation(BookValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "Book with ID {id} not found."),
            Self::AlreadyExists(id) => write!(f, "Book with ID {id} already exists."),
            Self::Duplicate { .. } => write!(
                f,
                "Book with the same title, author and year already exists."
            ),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl RepoError {
    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::AlreadyExists(_) => "already_exists",
            Self::Duplicate { .. } => "duplicate",
            Self::Validation(err) => err.code(),
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl<T> From<RepoError> for Outcome<T> {
    fn from(value: RepoError) -> Self {
        Outcome::fail(value.to_string())
    }
}

/// Partial update for `BookRepository::update`.
///
/// `None` fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

impl BookPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none()
    }
}

/// Storage-agnostic contract for book persistence.
pub trait BookRepository {
    /// Returns copies of every stored book.
    fn get_all(&self) -> Outcome<Vec<Book>>;
    /// Returns a copy of the book stored under `id`.
    fn find_by_id(&self, id: BookId) -> Outcome<Book>;
    /// Stores `book` under its id. Does not check content duplicates.
    fn add(&mut self, book: Book) -> Outcome;
    /// True when a book with a different id has the same content as `book`.
    fn exists_duplicate(&self, book: &Book) -> bool;
    /// Merges `patch` onto the stored book after re-validating the result.
    ///
    /// # Contract
    /// - Not-found, duplicate content and candidate validation failures all
    ///   come back as `Outcome::Failure`; the message is the `Display` of the
    ///   matching `RepoError` (validation failures reuse the
    ///   `BookValidationError` text unchanged).
    /// - Callers that need to branch on the kind validate with
    ///   `Book::with_id` before calling, keeping the validation channel
    ///   separate.
    /// - On any failure the stored book is unchanged.
    fn update(&mut self, id: BookId, patch: BookPatch) -> Outcome;
    /// Evicts the book stored under `id`; fails with not-found otherwise.
    fn remove(&mut self, id: BookId) -> Outcome;
}

/// `BTreeMap`-backed book store. Contents live only as long as the value.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: BTreeMap<BookId, Book>,
}

impl InMemoryBookRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn find_duplicate(&self, book: &Book) -> Option<BookId> {
        self.books
            .values()
            .find(|stored| stored.id() != book.id() && *stored == book)
            .map(Book::id)
    }

    fn try_update(&mut self, id: BookId, patch: BookPatch) -> Result<(), RepoError> {
        let stored = self.books.get(&id).ok_or(RepoError::NotFound(id))?;

        let candidate = Book::with_id(
            id,
            patch.title.unwrap_or_else(|| stored.title().to_string()),
            patch.author.unwrap_or_else(|| stored.author().to_string()),
            patch.year.unwrap_or(stored.year()),
        )?;

        if let Some(conflicting_id) = self.find_duplicate(&candidate) {
            return Err(RepoError::Duplicate { conflicting_id });
        }

        let stored = self.books.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        stored.take_content(candidate);
        Ok(())
    }
}

impl BookRepository for InMemoryBookRepository {
    fn get_all(&self) -> Outcome<Vec<Book>> {
        Outcome::ok(self.books.values().cloned().collect())
    }

    fn find_by_id(&self, id: BookId) -> Outcome<Book> {
        match self.books.get(&id) {
            Some(book) => Outcome::ok(book.clone()),
            None => RepoError::NotFound(id).into(),
        }
    }

    fn add(&mut self, book: Book) -> Outcome {
        let id = book.id();
        if self.books.contains_key(&id) {
            warn!("event=book_add module=repo status=error reason=already_exists id={id}");
            return RepoError::AlreadyExists(id).into();
        }

        self.books.insert(id, book);
        debug!(
            "event=book_add module=repo status=ok id={id} total={}",
            self.books.len()
        );
        Outcome::ok(())
    }

    fn exists_duplicate(&self, book: &Book) -> bool {
        self.find_duplicate(book).is_some()
    }

    fn update(&mut self, id: BookId, patch: BookPatch) -> Outcome {
        match self.try_update(id, patch) {
            Ok(()) => {
                debug!("event=book_update module=repo status=ok id={id}");
                Outcome::ok(())
            }
            Err(err) => {
                warn!(
                    "event=book_update module=repo status=error id={id} reason={}",
                    err.code()
                );
                err.into()
            }
        }
    }

    fn remove(&mut self, id: BookId) -> Outcome {
        if self.books.remove(&id).is_none() {
            warn!("event=book_remove module=repo status=error reason=not_found id={id}");
            return RepoError::NotFound(id).into();
        }

        debug!(
            "event=book_remove module=repo status=ok id={id} total={}",
            self.books.len()
        );
        Outcome::ok(())
    }
}
