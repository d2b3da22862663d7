//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract callers program against.
//! - Keep map/storage details out of service orchestration.
//!
//! # Invariants
//! - Writes go through `Book` validation before they reach storage.
//! - Repository APIs report operational failures (`NotFound`,
//!   `AlreadyExists`, `Duplicate`) through `Outcome`, not panics.

pub mod book_repo;
