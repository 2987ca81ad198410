//! Transactions - the single stored record of money moving between accounts
//!
//! A transaction is written once with two endpoints and is never stored
//! twice. Whether it reads as income or expense, paid or received, is
//! decided at read time by resolving the endpoints against an observer
//! (see [`crate::perspective`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, BusinessId, Money, PartyId, TransactionId};

use crate::perspective::{self, Direction, Perspective};

/// How the money physically moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    /// Cash changed hands
    Cash,
    /// Bank transfer, card, or wallet
    Online,
}

/// A single money movement between two accounts of one business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Owning business
    pub business_id: BusinessId,
    /// Amount moved, always positive
    pub amount: Money,
    /// When the money moved (may be backdated by the user)
    pub date: DateTime<Utc>,
    /// Free-text note
    pub description: Option<String>,
    /// How the money physically moved
    pub mode: PaymentMode,
    /// Account the money left
    pub from_account: AccountId,
    /// Account the money arrived at
    pub to_account: AccountId,
    /// Counterparty, when one side of the movement is a party account
    pub party_id: Option<PartyId>,
    /// Direction as the user entered it. Display convenience only;
    /// reports recompute direction from the endpoints and never trust
    /// this field.
    pub direction_hint: Option<Direction>,
    /// When the record was written
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns true if the account is one of the endpoints
    pub fn is_related_to(&self, account: AccountId) -> bool {
        self.to_account == account || self.from_account == account
    }

    /// Resolves this transaction from the given account's point of view
    pub fn perspective_for(&self, observer: AccountId) -> Perspective {
        perspective::resolve(self.to_account, self.from_account, observer)
    }

    /// Resolves this transaction as it reads on a party's ledger page
    /// (OUT = the business paid the party)
    pub fn perspective_for_party(&self, party_account: AccountId) -> Perspective {
        perspective::resolve_for_party(self.to_account, self.from_account, party_account)
    }

    /// Returns true if both endpoints are the same account
    ///
    /// Such rows are rejected at write time; this check exists so reports
    /// and the integrity audit can flag any that predate the validation.
    pub fn is_self_transfer(&self) -> bool {
        self.to_account == self.from_account
    }
}

/// Builder for a transaction about to be recorded
///
/// The draft carries everything the caller chooses; the book fills in the
/// identifier and timestamps when it accepts the draft.
///
/// # Example
///
/// ```rust,ignore
/// let draft = TransactionDraft::new(cash_id, sales_id, Money::new(dec!(250), Currency::USD))
///     .with_description("Walk-in sale")
///     .with_mode(PaymentMode::Online);
/// let id = book.record(draft)?;
/// ```
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    /// Amount to move
    pub amount: Money,
    /// Account the money leaves
    pub from_account: AccountId,
    /// Account the money arrives at
    pub to_account: AccountId,
    /// Effective date; defaults to the moment of recording
    pub date: Option<DateTime<Utc>>,
    /// Free-text note
    pub description: Option<String>,
    /// How the money physically moved
    pub mode: PaymentMode,
    /// Counterparty
    pub party_id: Option<PartyId>,
    /// Direction as entered by the user
    pub direction_hint: Option<Direction>,
}

impl TransactionDraft {
    /// Starts a draft moving `amount` from one account to another
    pub fn new(from_account: AccountId, to_account: AccountId, amount: Money) -> Self {
        Self {
            amount,
            from_account,
            to_account,
            date: None,
            description: None,
            mode: PaymentMode::Cash,
            party_id: None,
            direction_hint: None,
        }
    }

    /// Sets the effective date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Attaches a free-text note
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the payment mode
    pub fn with_mode(mut self, mode: PaymentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Links a counterparty
    pub fn with_party(mut self, party_id: PartyId) -> Self {
        self.party_id = Some(party_id);
        self
    }

    /// Records the direction the user saw when entering the row
    pub fn with_direction_hint(mut self, direction: Direction) -> Self {
        self.direction_hint = Some(direction);
        self
    }
}
