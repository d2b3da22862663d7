//! Library user model.
//!
//! # Invariants
//! - `id` comes from the user id sequence, independent of book ids.
//! - `name` is never empty or all-whitespace.

use crate::model::id_sequence::{IdSequence, IdSequenceExhausted};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity of a user within its id sequence.
pub type UserId = u32;

/// Field-level validation failures for `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    /// The id sequence had no identity left to assign.
    IdsExhausted,
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::IdsExhausted => write!(f, "No user identities left to assign."),
        }
    }
}

impl Error for UserValidationError {}

impl From<IdSequenceExhausted> for UserValidationError {
    fn from(_: IdSequenceExhausted) -> Self {
        Self::IdsExhausted
    }
}

/// Registered library user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: UserId,
    name: String,
}

#[derive(Deserialize)]
struct UserRecord {
    id: UserId,
    name: String,
}

impl TryFrom<UserRecord> for User {
    type Error = UserValidationError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name)
    }
}

impl User {
    /// Creates a user with the next id from `ids`.
    ///
    /// The id is consumed even when `name` is rejected. Fails with
    /// `IdsExhausted` when `ids` has no id left.
    pub fn new(ids: &mut IdSequence, name: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = ids.next_id()?;
        Self::with_id(id, name)
    }

    /// Creates a user with a caller-provided id (decode paths).
    pub fn with_id(id: UserId, name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id, name })
    }

    /// Identity assigned at construction.
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates and replaces the name. Unchanged on error.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), UserValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: \"{}\"", self.id, self.name)
    }
}

fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }
    Ok(())
}
