//! Integrity audit over recorded data
//!
//! The write path validates drafts, but books can contain rows that
//! predate a rule or were imported from elsewhere. The audit walks the
//! stored accounts and transactions and reports every violation it finds
//! without touching anything; reports stay total and count such rows
//! deterministically, and this is where they become visible.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use core_kernel::{AccountId, BusinessId, TransactionId};

use crate::account::FinancialAccount;
use crate::transaction::Transaction;

/// A stored row that violates the write-time rules
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum IntegrityIssue {
    /// Both endpoints of a transaction are the same account
    #[error("Transaction {transaction} transfers {account} to itself")]
    SelfTransfer {
        transaction: TransactionId,
        account: AccountId,
    },

    /// A transaction references an account the book does not know
    #[error("Transaction {transaction} references unknown account {account}")]
    UnknownAccount {
        transaction: TransactionId,
        account: AccountId,
    },

    /// A transaction belongs to a different business
    #[error("Transaction {transaction} does not belong to business {business}")]
    ForeignTransaction {
        transaction: TransactionId,
        business: BusinessId,
    },

    /// A transaction's amount is zero or negative
    #[error("Transaction {transaction} has a non-positive amount")]
    NonPositiveAmount { transaction: TransactionId },

    /// An account belongs to a different business
    #[error("Account {account} does not belong to this business")]
    ForeignAccount { account: AccountId },
}

/// Scans accounts and transactions for rule violations
///
/// Issues come back in a stable order: account problems first, then
/// transaction problems in entry order, so repeated audits of unchanged
/// books diff cleanly.
pub fn audit(
    transactions: &[Transaction],
    accounts: &[FinancialAccount],
    business_id: BusinessId,
) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    let known: HashSet<AccountId> = accounts.iter().map(|a| a.id).collect();
    for account in accounts {
        if account.business_id != business_id {
            issues.push(IntegrityIssue::ForeignAccount {
                account: account.id,
            });
        }
    }

    for txn in transactions {
        if txn.business_id != business_id {
            issues.push(IntegrityIssue::ForeignTransaction {
                transaction: txn.id,
                business: business_id,
            });
        }
        if txn.is_self_transfer() {
            issues.push(IntegrityIssue::SelfTransfer {
                transaction: txn.id,
                account: txn.from_account,
            });
        }
        if !known.contains(&txn.from_account) {
            issues.push(IntegrityIssue::UnknownAccount {
                transaction: txn.id,
                account: txn.from_account,
            });
        }
        if txn.to_account != txn.from_account && !known.contains(&txn.to_account) {
            issues.push(IntegrityIssue::UnknownAccount {
                transaction: txn.id,
                account: txn.to_account,
            });
        }
        if !txn.amount.is_positive() {
            issues.push(IntegrityIssue::NonPositiveAmount {
                transaction: txn.id,
            });
        }
    }

    issues
}
