//! Party entity - the counterparty registry record
//!
//! This module defines the Party record which represents anyone the
//! business trades with: customers who owe money, suppliers who are owed
//! money, employees drawing salaries, and other contacts.
//!
//! # Ledger Link
//!
//! Every party is backed by a party-kind financial account in the
//! business's books. The registry holds the contact data; the books hold
//! the money history. `ledger_account_id` ties the two together, so a
//! party's statement and balance are always derived from the same rows as
//! every other report.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::party::{Party, PartyType};
//! use core_kernel::{AccountId, BusinessId};
//!
//! let mut customer = Party::new(
//!     BusinessId::new_v7(),
//!     "Ravi Textiles",
//!     PartyType::Customer,
//!     AccountId::new_v7(),
//! );
//! customer.phone = Some("+91 98450 11223".to_string());
//!
//! assert!(customer.is_active);
//! assert!(customer.has_contact());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{AccountId, BusinessId, PartyId};

/// The relationship a party has with the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyType {
    /// Buys from the business; usually owes money
    Customer,
    /// Sells to the business; usually is owed money
    Supplier,
    /// Works for the business and draws salary or advances
    Employee,
    /// Any other counterparty (lenders, tax offices, owners)
    Other,
}

impl PartyType {
    /// Human-readable label for lists and statements
    pub fn label(&self) -> &'static str {
        match self {
            PartyType::Customer => "Customer",
            PartyType::Supplier => "Supplier",
            PartyType::Employee => "Employee",
            PartyType::Other => "Other",
        }
    }
}

/// A counterparty in the business's registry
///
/// The registry is the contact book behind the books: every customer,
/// supplier, or employee the business trades with gets one entry, linked
/// one-to-one with a party-kind financial account in the ledger. The entry
/// itself carries no balance; every figure shown next to a party is
/// derived from the ledger rows of its linked account.
///
/// # Examples
///
/// ```rust
/// use domain_party::party::{Party, PartyType};
/// use core_kernel::{AccountId, BusinessId};
///
/// let supplier = Party::new(
///     BusinessId::new_v7(),
///     "Acme Supplies",
///     PartyType::Supplier,
///     AccountId::new_v7(),
/// );
/// assert_eq!(supplier.party_type.label(), "Supplier");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Party {
    /// Unique party identifier
    pub id: PartyId,
    /// The business whose registry holds this entry
    pub business_id: BusinessId,
    /// Display name shown in lists and statements
    #[validate(length(
        min = 1,
        max = 120,
        message = "Party name must be between 1 and 120 characters"
    ))]
    pub name: String,
    /// The relationship with the business
    pub party_type: PartyType,
    /// Primary phone number
    #[validate(length(
        min = 7,
        max = 20,
        message = "Phone number must be between 7 and 20 characters"
    ))]
    pub phone: Option<String>,
    /// Primary email address
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Free-form postal address
    pub address: Option<String>,
    /// The party-kind financial account holding this party's money history
    pub ledger_account_id: AccountId,
    /// Whether this party is active; deactivated parties keep their history
    pub is_active: bool,
    /// When this party was created
    pub created_at: DateTime<Utc>,
    /// When this party was last updated
    pub updated_at: DateTime<Utc>,
}

impl Party {
    /// Creates a new active party with no contact details
    ///
    /// # Arguments
    ///
    /// * `business_id` - The owning business
    /// * `name` - Display name
    /// * `party_type` - The relationship with the business
    /// * `ledger_account_id` - The party-kind account backing this entry
    pub fn new(
        business_id: BusinessId,
        name: impl Into<String>,
        party_type: PartyType,
        ledger_account_id: AccountId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PartyId::new_v7(),
            business_id,
            name: name.into(),
            party_type,
            phone: None,
            email: None,
            address: None,
            ledger_account_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the party
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Replaces the contact details
    ///
    /// Passing `None` clears the corresponding field.
    pub fn set_contact(
        &mut self,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) {
        self.phone = phone;
        self.email = email;
        self.address = address;
        self.updated_at = Utc::now();
    }

    /// Returns true if the party has at least one way to be reached
    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }

    /// Deactivates the party, keeping its history
    ///
    /// Deactivated parties stay in the registry so old statements keep
    /// resolving their name, but new entries must not be recorded against
    /// them.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates a previously deactivated party
    pub fn reactivate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}
