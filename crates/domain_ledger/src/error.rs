//! Ledger domain errors

use core_kernel::{MoneyError, TemporalError};
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Account already exists
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// Account belongs to a different business
    #[error("Account {account} does not belong to business {business}")]
    ForeignAccount { account: String, business: String },

    /// Transaction not found
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    /// Both endpoints of a transaction reference the same account
    #[error("Transaction endpoints must be two distinct accounts: {0}")]
    SelfTransfer(String),

    /// Transaction amount is zero or negative
    #[error("Transaction amount must be positive: {0}")]
    NonPositiveAmount(String),

    /// Account still has recorded transactions
    #[error("Account has recorded transactions and cannot be deleted: {0}")]
    AccountInUse(String),

    /// System accounts cannot be deleted or retyped
    #[error("System account cannot be removed or retyped: {0}")]
    SystemAccount(String),

    /// A party-scoped report was requested for a non-party account
    #[error("Account is not a party account: {0}")]
    NotAPartyAccount(String),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Calendar arithmetic failed
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}
