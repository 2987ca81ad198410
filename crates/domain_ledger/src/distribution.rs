//! Where the business's money sits right now
//!
//! One slice per money account holding a positive balance, for pie and
//! donut charts. Accounts at zero or in the red are left out: a chart
//! slice of nothing (or of a negative share) has no sensible geometry.
//! An empty result means there is nothing to draw and callers are
//! expected to hide the chart rather than render an empty ring.

use serde::Serialize;

use core_kernel::{AccountId, Currency, Money};

use crate::account::FinancialAccount;
use crate::aggregate::summarize_account;
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// One money account's share of the held total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    /// Account holding the money
    pub account_id: AccountId,
    /// Display name of the account
    pub name: String,
    /// Current balance, always positive
    pub value: Money,
}

/// Builds the money distribution across the given accounts
///
/// Non-money accounts are skipped even if present in the input, so callers
/// can pass the full account list. Entries keep the order the accounts
/// were given in.
pub fn build_distribution(
    accounts: &[FinancialAccount],
    transactions: &[Transaction],
    currency: Currency,
) -> Result<Vec<DistributionEntry>, LedgerError> {
    let mut entries = Vec::new();

    for account in accounts.iter().filter(|a| a.is_money()) {
        let balance = summarize_account(transactions, account, currency)?.balance();
        if balance.is_positive() {
            entries.push(DistributionEntry {
                account_id: account.id,
                name: account.name.clone(),
                value: balance,
            });
        }
    }

    Ok(entries)
}

/// Sums the values of a distribution
///
/// Convenience for callers that show a "total held" figure next to the
/// chart.
pub fn distribution_total(
    entries: &[DistributionEntry],
    currency: Currency,
) -> Result<Money, LedgerError> {
    let mut total = Money::zero(currency);
    for entry in entries {
        total = total.checked_add(&entry.value)?;
    }
    Ok(total)
}
