//! Monotonic identity counter for catalog entities.
//!
//! # Responsibility
//! - Hand out entity ids from an explicit, caller-owned counter.
//!
//! # Invariants
//! - Ids are never handed out twice by the same sequence.
//! - The counter only moves forward unless explicitly `reset`.
//! - `u32::MAX` is never handed out; reaching it exhausts the sequence.
//!
//! # See also
//! - `crate::service::catalog_service::CatalogService`, which owns one
//!   sequence per entity type.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returned once a sequence has no ids left to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSequenceExhausted;

impl Display for IdSequenceExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "id sequence exhausted; no identities left to assign")
    }
}

impl Error for IdSequenceExhausted {}

/// Explicit replacement for a process-wide "next id" static.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Creates a sequence whose first id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence whose first id is `start`.
    pub fn starting_at(start: u32) -> Self {
        Self { next: start }
    }

    /// Returns the current id and advances the counter.
    ///
    /// # Errors
    /// - `IdSequenceExhausted` once the counter reaches `u32::MAX`; the
    ///   counter stays there, so later calls fail the same way.
    pub fn next_id(&mut self) -> Result<u32, IdSequenceExhausted> {
        let id = self.next;
        self.next = id.checked_add(1).ok_or(IdSequenceExhausted)?;
        Ok(id)
    }

    /// Returns the id the next call to `next_id` will hand out.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next == u32::MAX
    }

    /// Rewinds the sequence to `0`.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSequence, IdSequenceExhausted};

    #[test]
    fn hands_out_increasing_ids_from_zero() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), Ok(0));
        assert_eq!(ids.next_id(), Ok(1));
        assert_eq!(ids.peek(), 2);
    }

    #[test]
    fn starting_at_and_reset_control_counter_state() {
        let mut ids = IdSequence::starting_at(40);
        assert_eq!(ids.next_id(), Ok(40));

        ids.reset();
        assert_eq!(ids.next_id(), Ok(0));
    }

    #[test]
    fn counter_at_upper_bound_fails_instead_of_wrapping() {
        let mut ids = IdSequence::starting_at(u32::MAX - 1);
        assert_eq!(ids.next_id(), Ok(u32::MAX - 1));
        assert!(ids.is_exhausted());

        assert_eq!(ids.next_id(), Err(IdSequenceExhausted));
        assert_eq!(ids.next_id(), Err(IdSequenceExhausted));
        assert_eq!(ids.peek(), u32::MAX);
    }

    #[test]
    fn starting_at_max_is_exhausted_immediately() {
        let mut ids = IdSequence::starting_at(u32::MAX);
        assert_eq!(ids.next_id(), Err(IdSequenceExhausted));
        assert_eq!(ids.next_id(), Err(IdSequenceExhausted));
    }
}
