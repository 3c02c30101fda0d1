//! Validation rules applied to every airplane before it is written.

use thiserror::Error;

use crate::server::data::airplane::NewAirplane;

/// Minimum number of characters in an airplane name.
pub const NAME_MIN_LENGTH: usize = 6;

/// A validation rule violated by a candidate airplane.
///
/// The `Display` output is the message presented to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Name is empty or only whitespace
    #[error("Name can't be blank")]
    NameBlank,
    /// Name has fewer than [`NAME_MIN_LENGTH`] characters
    #[error("Name is too short (minimum is 6 characters)")]
    NameTooShort,
    /// Another stored airplane already uses this exact name
    #[error("Name has already been taken")]
    NameTaken,
}

/// Validates a candidate airplane.
///
/// Uniqueness needs a storage lookup, so the caller resolves it beforehand and passes the
/// outcome as `name_taken`, keeping this function free of I/O.
///
/// # Arguments
/// - `candidate` - The airplane about to be persisted
/// - `name_taken` - Whether another airplane already uses `candidate.name`
///
/// # Returns
/// - `Ok(())` - The candidate satisfies every rule
/// - `Err(Vec<Violation>)` - Every violated rule, in the order the rules are checked
pub fn validate_airplane(candidate: &NewAirplane, name_taken: bool) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if candidate.name.trim().is_empty() {
        violations.push(Violation::NameBlank);
    }

    if candidate.name.chars().count() < NAME_MIN_LENGTH {
        violations.push(Violation::NameTooShort);
    }

    if name_taken {
        violations.push(Violation::NameTaken);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Converts violations into the messages shown to the user.
pub fn violation_messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(ToString::to_string).collect()
}
