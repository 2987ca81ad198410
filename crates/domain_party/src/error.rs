//! Party registry errors
//!
//! This module defines all error types that can occur in the party
//! registry, including validation and lookup failures.

use thiserror::Error;

/// Errors that can occur in the party registry
#[derive(Debug, Error)]
pub enum PartyError {
    /// Party with the given ID was not found
    #[error("Party not found: {0}")]
    PartyNotFound(String),

    /// Attempted to create a party that already exists
    #[error("Duplicate party: {0}")]
    DuplicateParty(String),

    /// Invalid party data provided
    #[error("Invalid party data: {0}")]
    InvalidData(String),

    /// Party validation failed
    #[error("Party validation failed: {0}")]
    ValidationFailed(String),

    /// Cannot post new entries against an inactive party
    #[error("Party is inactive")]
    InactiveParty,
}

impl PartyError {
    /// Creates a PartyNotFound error from any ID type
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        PartyError::PartyNotFound(id.to_string())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        PartyError::InvalidData(message.into())
    }

    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PartyError::ValidationFailed(errors.join("; "))
    }
}
