//! Core domain logic for the library catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod outcome;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::book::{
    Book, BookFormat, BookId, BookValidationError, DigitalEdition, MAX_YEAR, MIN_YEAR,
};
pub use model::id_sequence::IdSequence;
pub use model::user::{User, UserId, UserValidationError};
pub use outcome::Outcome;
pub use repo::book_repo::{BookPatch, BookRepository, InMemoryBookRepository, RepoError};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
