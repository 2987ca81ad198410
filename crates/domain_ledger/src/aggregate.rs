//! Aggregation of transactions into account and business totals
//!
//! Totals are never stored. Each summary is folded from the transaction
//! set on demand, so a deleted or edited transaction is reflected the next
//! time anyone looks, with no reconciliation step.

use serde::Serialize;

use core_kernel::{Currency, Money, TransactionId};

use crate::account::{AccountIndex, AccountKind, FinancialAccount};
use crate::classify::{classify, CashImpact};
use crate::error::LedgerError;
use crate::perspective::Perspective;
use crate::transaction::Transaction;

/// Money in, money out, and the rows that looked wrong along the way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    /// Sum of amounts that arrived at the observer
    pub total_in: Money,
    /// Sum of amounts that left the observer
    pub total_out: Money,
    /// Transactions that were counted but deserve a second look
    /// (currently: self-transfers that predate write-time validation)
    pub suspect: Vec<TransactionId>,
}

impl AccountSummary {
    /// An empty summary in the given currency
    pub fn empty(currency: Currency) -> Self {
        Self {
            total_in: Money::zero(currency),
            total_out: Money::zero(currency),
            suspect: Vec::new(),
        }
    }

    /// Net position: total in minus total out
    ///
    /// Negative when more left than arrived. Both totals share a currency
    /// by construction, so the subtraction cannot mismatch.
    pub fn balance(&self) -> Money {
        self.total_in - self.total_out
    }

    /// Returns true if any counted row was flagged
    pub fn has_suspects(&self) -> bool {
        !self.suspect.is_empty()
    }
}

/// Sums the transactions related to one account
///
/// Transactions not touching the observer contribute nothing. For a party
/// account the totals carry the flipped, party-ledger labels: a row that
/// credited the party's account was the business paying out, so it counts
/// toward total out, and the balance goes negative as the business pays.
///
/// # Arguments
///
/// * `transactions` - Candidate rows; unrelated ones are skipped
/// * `observer` - The account the totals are relative to
/// * `currency` - Currency of the resulting totals
pub fn summarize_account(
    transactions: &[Transaction],
    observer: &FinancialAccount,
    currency: Currency,
) -> Result<AccountSummary, LedgerError> {
    let mut summary = AccountSummary::empty(currency);
    let flip_for_party = observer.kind() == AccountKind::Party;

    for txn in transactions {
        let perspective = if flip_for_party {
            txn.perspective_for_party(observer.id)
        } else {
            txn.perspective_for(observer.id)
        };

        if txn.is_self_transfer() && perspective.is_related() {
            summary.suspect.push(txn.id);
        }

        match perspective {
            Perspective::In => summary.total_in = summary.total_in.checked_add(&txn.amount)?,
            Perspective::Out => summary.total_out = summary.total_out.checked_add(&txn.amount)?,
            Perspective::Unrelated => {}
        }
    }

    Ok(summary)
}

/// Sums the cash flows of the business as a whole
///
/// Uses the endpoint kinds rather than a single observer: arrivals at any
/// money account count in, departures from any money account count out,
/// and internal moves between money accounts cancel to neutral.
///
/// Rows referencing an account the index does not know are flagged and
/// skipped rather than guessed at.
pub fn summarize_business(
    transactions: &[Transaction],
    index: &AccountIndex,
    currency: Currency,
) -> Result<AccountSummary, LedgerError> {
    let mut summary = AccountSummary::empty(currency);

    for txn in transactions {
        let (Some(to_kind), Some(from_kind)) =
            (index.kind_of(txn.to_account), index.kind_of(txn.from_account))
        else {
            summary.suspect.push(txn.id);
            continue;
        };

        match classify(to_kind, from_kind) {
            CashImpact::Inflow => summary.total_in = summary.total_in.checked_add(&txn.amount)?,
            CashImpact::Outflow => {
                summary.total_out = summary.total_out.checked_add(&txn.amount)?
            }
            CashImpact::Neutral | CashImpact::Unrelated => {}
        }
    }

    Ok(summary)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::account::{AccountSubtype, MoneyType};
    use crate::transaction::PaymentMode;
    use chrono::Utc;
    use core_kernel::BusinessId;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn two_account_set(
        flows: Vec<(bool, u32)>,
    ) -> (FinancialAccount, FinancialAccount, Vec<Transaction>) {
        let business = BusinessId::new();
        let a = FinancialAccount::new(business, "A", AccountSubtype::Money(MoneyType::Cash));
        let b = FinancialAccount::new(business, "B", AccountSubtype::Money(MoneyType::Online));

        let transactions = flows
            .into_iter()
            .map(|(a_to_b, cents)| {
                let (from, to) = if a_to_b { (a.id, b.id) } else { (b.id, a.id) };
                Transaction {
                    id: TransactionId::new_v7(),
                    business_id: business,
                    amount: Money::new(Decimal::new(i64::from(cents), 2), Currency::USD),
                    date: Utc::now(),
                    description: None,
                    mode: PaymentMode::Cash,
                    from_account: from,
                    to_account: to,
                    party_id: None,
                    direction_hint: None,
                    created_at: Utc::now(),
                }
            })
            .collect();

        (a, b, transactions)
    }

    proptest! {
        /// Over a set whose endpoints are exactly {A, B}, what flows into
        /// A is what flows out of B, and vice versa.
        #[test]
        fn prop_totals_mirror_between_the_two_endpoints(
            flows in proptest::collection::vec((any::<bool>(), 1u32..=10_000_000), 0..50),
        ) {
            let (a, b, transactions) = two_account_set(flows);
            let summary_a = summarize_account(&transactions, &a, Currency::USD).unwrap();
            let summary_b = summarize_account(&transactions, &b, Currency::USD).unwrap();

            prop_assert_eq!(summary_a.total_in, summary_b.total_out);
            prop_assert_eq!(summary_a.total_out, summary_b.total_in);
        }

        /// Summarizing the same slice twice yields identical output.
        #[test]
        fn prop_summaries_are_pure(
            flows in proptest::collection::vec((any::<bool>(), 1u32..=10_000_000), 0..50),
        ) {
            let (a, _, transactions) = two_account_set(flows);
            let first = summarize_account(&transactions, &a, Currency::USD).unwrap();
            let second = summarize_account(&transactions, &a, Currency::USD).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
