//! Catalog domain model.
//!
//! # Responsibility
//! - Define the entities stored and handed out by the catalog.
//! - Own field validation so no other layer re-implements it.
//!
//! # Invariants
//! - Every entity is identified by an id drawn from an explicit
//!   `IdSequence`; ids are never reassigned.
//! - Printed books and e-books are one `Book` type with a `BookFormat` tag.

pub mod book;
pub mod id_sequence;
pub mod user;
