//! Ledger Domain - Single-Entry Books with Observer-Relative Reports
//!
//! This crate implements the bookkeeping core for small businesses: one
//! stored transaction per money movement, with every report figure derived
//! from it at read time.
//!
//! # Perspective Model
//!
//! A transaction records only its two endpoints. Direction is a property
//! of the reader, not the row:
//! - Money arriving at the observer's account reads as IN
//! - Money leaving the observer's account reads as OUT
//! - A row touching neither endpoint reads as UNRELATED
//! - A counterparty sees the business's rows flipped: what the business
//!   paid, the party received
//!
//! # Account Kinds
//!
//! - **Money**: Cash boxes, bank accounts, cheques in hand
//! - **Party**: Mirrors of customer, supplier, and employee ledgers
//! - **Category**: Income, expense, asset, equity, and adjustment buckets
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{open_book, Business, TransactionDraft};
//!
//! let business = Business::new("Corner Grocery", Currency::USD, Timezone::default());
//! let mut book = open_book(&business)?;
//!
//! // Record a cash sale
//! book.record(TransactionDraft::new(sales_id, cash_id, amount)
//!     .with_description("Morning sales"))?;
//!
//! let position = book.cash_position()?;
//! ```

pub mod account;
pub mod aggregate;
pub mod book;
pub mod business;
pub mod classify;
pub mod distribution;
pub mod error;
pub mod integrity;
pub mod perspective;
pub mod ports;
pub mod statement;
pub mod timeseries;
pub mod transaction;

pub use account::{
    AccountIndex, AccountKind, AccountSubtype, CategoryType, FinancialAccount, MoneyType,
    PartyType,
};
pub use aggregate::{summarize_account, summarize_business, AccountSummary};
pub use book::LedgerBook;
pub use business::{open_book, Business, StandardAccounts};
pub use classify::{classify, CashImpact};
pub use distribution::{build_distribution, distribution_total, DistributionEntry};
pub use error::LedgerError;
pub use integrity::{audit, IntegrityIssue};
pub use perspective::{resolve, resolve_for_party, Direction, Perspective};
pub use ports::{LedgerPort, LedgerPortExt, TransactionQuery};
pub use statement::{
    build_party_statement, PartyStatement, StatementFilter, StatementGroup, StatementLine,
    StatementTotals,
};
pub use timeseries::{build_daily_series, DailyFlow};
pub use transaction::{PaymentMode, Transaction, TransactionDraft};

#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockLedgerPort;
