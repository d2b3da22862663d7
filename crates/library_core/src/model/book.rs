//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record shared by printed books and e-books.
//! - Guard title/author/year with eager validation on every write.
//!
//! # Invariants
//! - `id` is assigned once and never changes.
//! - `title` and `author` are never empty or all-whitespace.
//! - `year` stays within `[MIN_YEAR, MAX_YEAR]`.
//! - Equality and hashing use `(title, author, year)` only.
//! - E-book fields (`file_format`, `file_size_mb`) are not validated.

use crate::model::id_sequence::{IdSequence, IdSequenceExhausted};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Identity of a book within its id sequence.
pub type BookId = u32;

/// Minimum allowed publication year.
pub const MIN_YEAR: i32 = 0;
/// Maximum allowed publication year.
pub const MAX_YEAR: i32 = 2025;

/// Field-level validation failures for `Book`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
    YearOutOfRange { year: i32 },
    /// The id sequence had no identity left to assign.
    IdsExhausted,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty."),
            Self::EmptyAuthor => write!(f, "Author name cannot be empty."),
            Self::YearOutOfRange { year } => write!(
                f,
                "Book publication year must be between {MIN_YEAR} and {MAX_YEAR} (got {year})"
            ),
            Self::IdsExhausted => write!(f, "No book identities left to assign."),
        }
    }
}

impl Error for BookValidationError {}

impl From<IdSequenceExhausted> for BookValidationError {
    fn from(_: IdSequenceExhausted) -> Self {
        Self::IdsExhausted
    }
}

impl BookValidationError {
    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::EmptyAuthor => "empty_author",
            Self::YearOutOfRange { .. } => "year_out_of_range",
            Self::IdsExhausted => "ids_exhausted",
        }
    }
}

/// Digital extension carried by e-books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalEdition {
    /// File format label, e.g. `PDF` or `EPUB`. Free-form.
    pub file_format: String,
    /// File size in megabytes. Free-form.
    pub file_size_mb: f64,
}

impl DigitalEdition {
    /// Creates a digital extension; neither field is validated.
    pub fn new(file_format: impl Into<String>, file_size_mb: f64) -> Self {
        Self {
            file_format: file_format.into(),
            file_size_mb,
        }
    }

    pub fn set_file_format(&mut self, file_format: impl Into<String>) {
        self.file_format = file_format.into();
    }

    pub fn set_file_size_mb(&mut self, file_size_mb: f64) {
        self.file_size_mb = file_size_mb;
    }
}

/// Physical shape of a catalog entry.
///
/// Printed books and e-books share one collection; the digital extension is
/// only reachable through `Book::as_ebook`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookFormat {
    #[default]
    Plain,
    Electronic(DigitalEdition),
}

/// Catalog book record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    year: i32,
    format: BookFormat,
}

/// Unvalidated wire shape; converted through `Book::with_id` on decode.
#[derive(Deserialize)]
struct BookRecord {
    id: BookId,
    title: String,
    author: String,
    year: i32,
    #[serde(default)]
    format: BookFormat,
}

impl TryFrom<BookRecord> for Book {
    type Error = BookValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        let book = Self::with_id(record.id, record.title, record.author, record.year)?;
        Ok(book.with_format(record.format))
    }
}

impl Book {
    /// Creates a printed book with the next id from `ids`.
    ///
    /// The id is drawn before any field is checked, so a rejected book
    /// still consumes one counter value.
    ///
    /// # Errors
    /// - `IdsExhausted` when `ids` has no id left; nothing is validated.
    /// - Fields are checked in order title, author, year; the first failure
    ///   is returned.
    pub fn new(
        ids: &mut IdSequence,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Self, BookValidationError> {
        let id = ids.next_id()?;
        Self::with_id(id, title, author, year)
    }

    /// Creates an e-book with the next id from `ids`.
    ///
    /// Same id/validation order as `Book::new`; `edition` is taken as-is.
    pub fn new_ebook(
        ids: &mut IdSequence,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        edition: DigitalEdition,
    ) -> Result<Self, BookValidationError> {
        Ok(Self::new(ids, title, author, year)?.with_format(BookFormat::Electronic(edition)))
    }

    /// Creates a printed book with a caller-provided id.
    ///
    /// Used for update candidates and decode paths where identity already
    /// exists.
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        let author = author.into();
        validate_title(&title)?;
        validate_author(&author)?;
        validate_year(year)?;

        Ok(Self {
            id,
            title,
            author,
            year,
            format: BookFormat::Plain,
        })
    }

    /// Replaces the format, keeping identity and content.
    pub fn with_format(mut self, format: BookFormat) -> Self {
        self.format = format;
        self
    }

    /// Identity assigned at construction.
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Validated, non-blank title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Printed or electronic shape of this entry.
    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    /// Validates and replaces the title. Unchanged on error.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), BookValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Validates and replaces the author. Unchanged on error.
    pub fn set_author(&mut self, author: impl Into<String>) -> Result<(), BookValidationError> {
        let author = author.into();
        validate_author(&author)?;
        self.author = author;
        Ok(())
    }

    /// Validates and replaces the publication year. Unchanged on error.
    pub fn set_year(&mut self, year: i32) -> Result<(), BookValidationError> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }

    /// True when this entry carries a `DigitalEdition`.
    pub fn is_ebook(&self) -> bool {
        matches!(self.format, BookFormat::Electronic(_))
    }

    /// Returns the digital extension when this book is an e-book.
    pub fn as_ebook(&self) -> Option<&DigitalEdition> {
        match &self.format {
            BookFormat::Electronic(edition) => Some(edition),
            BookFormat::Plain => None,
        }
    }

    /// Mutable digital extension. Its fields are written without validation.
    pub fn as_ebook_mut(&mut self) -> Option<&mut DigitalEdition> {
        match &mut self.format {
            BookFormat::Electronic(edition) => Some(edition),
            BookFormat::Plain => None,
        }
    }

    /// Short type label used by listings (`Book` / `EBook`).
    pub fn kind_name(&self) -> &'static str {
        match self.format {
            BookFormat::Plain => "Book",
            BookFormat::Electronic(_) => "EBook",
        }
    }

    /// Download summary for e-books; `None` for printed books.
    pub fn download_info(&self) -> Option<String> {
        self.as_ebook().map(|edition| {
            format!(
                "Download Info: '{}' ({} | {} MB)",
                self.title, edition.file_format, edition.file_size_mb
            )
        })
    }

    /// Moves already-validated content fields from `candidate` onto `self`.
    ///
    /// Identity and format are kept.
    pub(crate) fn take_content(&mut self, candidate: Book) {
        self.title = candidate.title;
        self.author = candidate.author;
        self.year = candidate.year;
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.author == other.author && self.year == other.year
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.author.hash(state);
        self.year.hash(state);
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: \"{}\" by {} ({})",
            self.id, self.title, self.author, self.year
        )?;
        if let Some(edition) = self.as_ebook() {
            write!(f, " [{} | {} MB]", edition.file_format, edition.file_size_mb)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), BookValidationError> {
    if title.trim().is_empty() {
        return Err(BookValidationError::EmptyTitle);
    }
    Ok(())
}

fn validate_author(author: &str) -> Result<(), BookValidationError> {
    if author.trim().is_empty() {
        return Err(BookValidationError::EmptyAuthor);
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<(), BookValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(BookValidationError::YearOutOfRange { year });
    }
    Ok(())
}
