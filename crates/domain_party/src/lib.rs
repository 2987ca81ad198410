//! Party Registry Domain
//!
//! This crate holds the registry of people and businesses a book-keeping
//! business deals with: customers, suppliers, employees, and anyone else
//! money moves to or from. Each entry carries contact details and a link
//! to the party-kind ledger account its transaction history lives on.
//!
//! # Registry Model
//!
//! - **Customer** buys from the business
//! - **Supplier** sells to the business
//! - **Employee** draws wages from the business
//! - **Other** covers lenders, landlords, and the rest
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::{AccountId, BusinessId};
//! use domain_party::{Party, PartyType, PartyValidator};
//!
//! let mut party = Party::new(
//!     BusinessId::new_v7(),
//!     "Ravi Textiles",
//!     PartyType::Customer,
//!     AccountId::new_v7(),
//! );
//! party.set_contact(Some("+91 98450 11223".to_string()), None, None);
//!
//! let result = PartyValidator::validate(&party);
//! assert!(result.is_valid);
//! ```

pub mod error;
pub mod party;
pub mod ports;
pub mod validation;

pub use error::PartyError;
pub use party::{Party, PartyType};
pub use ports::{CreatePartyRequest, PartyPort, PartyPortExt, PartyQuery, UpdatePartyRequest};
pub use validation::{PartyValidator, ValidationResult};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPartyPort;
