//! Account types for the books of a business
//!
//! Every account is one of three kinds. MONEY accounts hold actual cash or
//! bank balances, PARTY accounts mirror a counterparty's ledger, and
//! CATEGORY accounts absorb income, expense, and adjustment flows. The
//! subtype is carried inside the kind so the two can never disagree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{AccountId, BusinessId};

/// The three kinds of account the ledger distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountKind {
    /// Holds real money (cash box, bank account, cheques in hand)
    Money,
    /// Mirrors the ledger of a customer, supplier, or employee
    Party,
    /// Income, expense, asset, equity, or adjustment bucket
    Category,
}

/// Where a money account physically keeps its funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoneyType {
    Cash,
    Online,
    Cheque,
}

/// The relationship of a party account's counterparty to the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartyType {
    Customer,
    Supplier,
    Employee,
    Other,
}

/// What a category account accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryType {
    Income,
    Expense,
    Asset,
    Equity,
    Adjustment,
}

/// Kind-specific detail of an account
///
/// Carrying the detail inside the variant guarantees the invariant that an
/// account's subtype always matches its kind; there is no separate nullable
/// column to keep consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountSubtype {
    Money(MoneyType),
    Party(PartyType),
    Category(CategoryType),
}

impl AccountSubtype {
    /// Returns the kind this subtype belongs to
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountSubtype::Money(_) => AccountKind::Money,
            AccountSubtype::Party(_) => AccountKind::Party,
            AccountSubtype::Category(_) => AccountKind::Category,
        }
    }
}

/// An account in the books of one business
///
/// Accounts never store a running balance; every figure shown for an
/// account is derived on demand from the transaction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAccount {
    /// Unique identifier
    pub id: AccountId,
    /// Owning business
    pub business_id: BusinessId,
    /// Display name
    pub name: String,
    /// Kind-specific detail
    pub subtype: AccountSubtype,
    /// System accounts are created at bootstrap and cannot be removed
    pub is_system: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl FinancialAccount {
    /// Creates a new user account
    ///
    /// # Arguments
    ///
    /// * `business_id` - Owning business
    /// * `name` - Display name
    /// * `subtype` - Kind-specific detail
    pub fn new(
        business_id: BusinessId,
        name: impl Into<String>,
        subtype: AccountSubtype,
    ) -> Self {
        Self {
            id: AccountId::new_v7(),
            business_id,
            name: name.into(),
            subtype,
            is_system: false,
            created_at: Utc::now(),
        }
    }

    /// Creates a system account (bootstrap defaults)
    pub fn system(
        business_id: BusinessId,
        name: impl Into<String>,
        subtype: AccountSubtype,
    ) -> Self {
        Self {
            is_system: true,
            ..Self::new(business_id, name, subtype)
        }
    }

    /// Returns the account kind
    pub fn kind(&self) -> AccountKind {
        self.subtype.kind()
    }

    /// Returns true if this account holds real money
    pub fn is_money(&self) -> bool {
        self.kind() == AccountKind::Money
    }

    /// Returns true if this account mirrors a counterparty's ledger
    pub fn is_party(&self) -> bool {
        self.kind() == AccountKind::Party
    }
}

/// Lookup table from account id to account kind
///
/// The business-level classifier and the daily series only need to know the
/// kind of each endpoint, so reports build this once per call instead of
/// threading full account records around.
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    kinds: HashMap<AccountId, AccountKind>,
}

impl AccountIndex {
    /// Builds an index over the given accounts
    pub fn build(accounts: &[FinancialAccount]) -> Self {
        Self {
            kinds: accounts.iter().map(|a| (a.id, a.kind())).collect(),
        }
    }

    /// Returns the kind of an account, if known
    pub fn kind_of(&self, id: AccountId) -> Option<AccountKind> {
        self.kinds.get(&id).copied()
    }

    /// Returns true if the account is known and holds money
    pub fn is_money(&self, id: AccountId) -> bool {
        self.kind_of(id) == Some(AccountKind::Money)
    }
}
