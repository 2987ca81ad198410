//! Business-level cash impact of a transaction
//!
//! Where [`crate::perspective`] asks "which way did this move relative to
//! one account", the classifier asks "did the business as a whole gain or
//! lose money". Only MONEY accounts count as the business's cash, so the
//! answer depends on the kinds of the two endpoints.
//!
//! Movements touching no money account (party-to-category adjustments,
//! write-offs between ledgers) are treated as cash-unrelated rather than
//! given an imputed direction. That keeps income and expense figures equal
//! to actual cash observed, at the cost of excluding purely accrual rows.

use serde::{Deserialize, Serialize};

use crate::account::AccountKind;

/// Effect of a transaction on the business's cash position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashImpact {
    /// Cash entered the business from outside
    Inflow,
    /// Cash left the business
    Outflow,
    /// Cash moved between two money accounts of the business
    Neutral,
    /// Neither endpoint holds business cash
    Unrelated,
}

impl CashImpact {
    /// Returns true if the transaction changed total cash held
    pub fn changes_cash_held(&self) -> bool {
        matches!(self, CashImpact::Inflow | CashImpact::Outflow)
    }
}

/// Classifies a transaction by the kinds of its endpoints
pub fn classify(to_kind: AccountKind, from_kind: AccountKind) -> CashImpact {
    match (to_kind, from_kind) {
        (AccountKind::Money, AccountKind::Money) => CashImpact::Neutral,
        (AccountKind::Money, _) => CashImpact::Inflow,
        (_, AccountKind::Money) => CashImpact::Outflow,
        _ => CashImpact::Unrelated,
    }
}
