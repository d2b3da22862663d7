//! Success/failure carrier returned by catalog operations.
//!
//! # Responsibility
//! - Give every fallible repository operation one uniform return shape.
//! - Carry a human-readable message on failure, never both value and message.
//!
//! # Invariants
//! - An `Outcome` is either `Success` or `Failure`; it is immutable once built.
//! - Reading the value of a failure or the message of a success yields `None`.

use std::fmt::Display;

/// Outcome of a catalog operation.
///
/// `Outcome<()>` is the value-less form used by `add`/`update`/`remove`.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self::Success(value)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the carried value, or `None` for failures.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the carried value, or `T::default()` for failures.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }

    /// Returns the failure message, or `None` for successes.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(message) => Some(message.as_str()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Converts into a std `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}
