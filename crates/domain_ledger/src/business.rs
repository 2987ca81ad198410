//! The business that owns a set of books
//!
//! Carries the settings every report needs: the currency figures are kept
//! in and the local timezone that decides which calendar day a
//! transaction belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BusinessId, Currency, Timezone};

use crate::account::{AccountSubtype, CategoryType, FinancialAccount, MoneyType};
use crate::book::LedgerBook;
use crate::error::LedgerError;

/// A business whose money the ledger tracks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Unique identifier
    pub id: BusinessId,
    /// Display name
    pub name: String,
    /// Currency all books of this business are kept in
    pub currency: Currency,
    /// Local timezone for day bucketing and statement labels
    pub timezone: Timezone,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Business {
    /// Creates a new business
    pub fn new(name: impl Into<String>, currency: Currency, timezone: Timezone) -> Self {
        Self {
            id: BusinessId::new_v7(),
            name: name.into(),
            currency,
            timezone,
            created_at: Utc::now(),
        }
    }
}

/// The accounts every new business starts with
pub struct StandardAccounts;

impl StandardAccounts {
    /// Creates the default chart for a business
    ///
    /// Cash and Opening Balance are system accounts: the first money
    /// entry and the opening adjustment always have somewhere to land,
    /// and neither can be deleted out from under the books. The category
    /// accounts are ordinary and can be renamed or removed while unused.
    pub fn create_for(business_id: BusinessId) -> Vec<FinancialAccount> {
        vec![
            FinancialAccount::system(business_id, "Cash", AccountSubtype::Money(MoneyType::Cash)),
            FinancialAccount::system(
                business_id,
                "Opening Balance",
                AccountSubtype::Category(CategoryType::Adjustment),
            ),
            FinancialAccount::new(
                business_id,
                "Sales",
                AccountSubtype::Category(CategoryType::Income),
            ),
            FinancialAccount::new(
                business_id,
                "Purchases",
                AccountSubtype::Category(CategoryType::Expense),
            ),
            FinancialAccount::new(
                business_id,
                "Rent",
                AccountSubtype::Category(CategoryType::Expense),
            ),
            FinancialAccount::new(
                business_id,
                "Salaries",
                AccountSubtype::Category(CategoryType::Expense),
            ),
        ]
    }
}

/// Opens a fresh book for a business, seeded with the standard accounts
pub fn open_book(business: &Business) -> Result<LedgerBook, LedgerError> {
    let mut book = LedgerBook::new(business.id, business.currency);
    for account in StandardAccounts::create_for(business.id) {
        book.add_account(account)?;
    }
    Ok(book)
}
