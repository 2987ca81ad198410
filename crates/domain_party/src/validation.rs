//! Party validation rules
//!
//! This module validates registry entries before they are saved or used
//! for new ledger entries.
//!
//! # Validation Rules
//!
//! - Name must be present, non-blank, and at most 120 characters
//! - Email must look like an email address (if provided)
//! - Phone must be 7-20 characters with at least 7 digits and no letters
//!   (if provided)
//! - A party with neither phone nor email gets a warning
//! - An inactive party is a warning for plain validation and an error
//!   when posting new entries

use validator::Validate;

use crate::error::PartyError;
use crate::party::Party;

/// Result of party validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the party is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts the result into a `Result`, treating errors as fatal
    ///
    /// Warnings are dropped; callers that care about warnings should
    /// inspect the result directly.
    pub fn into_result(self) -> Result<(), PartyError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(PartyError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for registry entries
///
/// # Examples
///
/// ```rust
/// use domain_party::party::{Party, PartyType};
/// use domain_party::validation::PartyValidator;
/// use core_kernel::{AccountId, BusinessId};
///
/// let mut party = Party::new(
///     BusinessId::new_v7(),
///     "Ravi Textiles",
///     PartyType::Customer,
///     AccountId::new_v7(),
/// );
/// party.email = Some("not-an-email".to_string());
///
/// let result = PartyValidator::validate(&party);
/// assert!(!result.is_valid);
/// ```
pub struct PartyValidator;

impl PartyValidator {
    /// Validates a registry entry
    ///
    /// # Arguments
    ///
    /// * `party` - The party to validate
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(party: &Party) -> ValidationResult {
        let mut result = ValidationResult::ok();

        // Field-level rules (name length, email and phone shape) come
        // from the derive on Party.
        if let Err(errors) = party.validate() {
            for (field, failures) in errors.field_errors() {
                for failure in failures {
                    match &failure.message {
                        Some(message) => result.add_error(message.to_string()),
                        None => result.add_error(format!("{field}: {}", failure.code)),
                    }
                }
            }
        }

        Self::validate_name(party, &mut result);
        Self::validate_contact(party, &mut result);

        if !party.is_active {
            result.add_warning("Party is inactive");
        }

        result
    }

    /// Validates a party that is about to receive a new ledger entry
    ///
    /// Same as [`PartyValidator::validate`], except an inactive party is
    /// an error here rather than a warning: new money must not be
    /// recorded against a deactivated counterparty.
    pub fn validate_for_posting(party: &Party) -> ValidationResult {
        let mut result = Self::validate(party);
        if !party.is_active {
            result.add_error("Cannot record entries against an inactive party");
        }
        result
    }

    fn validate_name(party: &Party, result: &mut ValidationResult) {
        if party.name.trim().is_empty() {
            result.add_error("Party name cannot be blank");
        }
    }

    fn validate_contact(party: &Party, result: &mut ValidationResult) {
        if let Some(ref phone) = party.phone {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < 7 {
                result.add_error(format!("Phone number has too few digits: {phone}"));
            }
            let allowed =
                |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')');
            if !phone.chars().all(allowed) {
                result.add_error(format!("Phone number has invalid characters: {phone}"));
            }
        }

        if !party.has_contact() {
            result.add_warning("Party has no phone or email on file");
        }
    }
}
