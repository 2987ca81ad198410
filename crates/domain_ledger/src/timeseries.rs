//! Daily cash-flow series for charting
//!
//! Produces one entry per calendar day of the requested window, in the
//! business's local timezone, with days that saw no movement filled with
//! zeroes. Charts can consume the series directly without patching gaps.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use core_kernel::{Currency, DateRange, Money, Timezone};

use crate::account::AccountIndex;
use crate::classify::{classify, CashImpact};
use crate::error::LedgerError;
use crate::transaction::Transaction;

/// Cash that entered and left the business on one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFlow {
    /// Local calendar day
    pub date: NaiveDate,
    /// Cash that arrived from outside the business
    pub income: Money,
    /// Cash that left the business
    pub expense: Money,
    /// Income minus expense for this day alone (not a running total)
    pub net: Money,
}

/// Builds the zero-filled daily series over a window
///
/// Each transaction is bucketed by the local calendar day of its effective
/// date. Rows outside the window, internal money moves, and rows that do
/// not touch a money account contribute nothing. The result is ascending
/// by date and always exactly as long as the window.
///
/// # Arguments
///
/// * `transactions` - Candidate rows
/// * `index` - Account kinds for endpoint classification
/// * `window` - Inclusive date range to cover
/// * `timezone` - Business-local timezone used for day bucketing
/// * `currency` - Currency of the per-day figures
pub fn build_daily_series(
    transactions: &[Transaction],
    index: &AccountIndex,
    window: DateRange,
    timezone: Timezone,
    currency: Currency,
) -> Result<Vec<DailyFlow>, LedgerError> {
    let zero = Money::zero(currency);
    let mut buckets: HashMap<NaiveDate, (Money, Money)> =
        window.iter_days().map(|day| (day, (zero, zero))).collect();

    for txn in transactions {
        let day = timezone.local_date(txn.date);
        let Some(bucket) = buckets.get_mut(&day) else {
            continue;
        };

        // Unknown endpoints contribute nothing here; the integrity audit
        // is the place that reports them.
        let (Some(to_kind), Some(from_kind)) =
            (index.kind_of(txn.to_account), index.kind_of(txn.from_account))
        else {
            continue;
        };

        match classify(to_kind, from_kind) {
            CashImpact::Inflow => bucket.0 = bucket.0.checked_add(&txn.amount)?,
            CashImpact::Outflow => bucket.1 = bucket.1.checked_add(&txn.amount)?,
            CashImpact::Neutral | CashImpact::Unrelated => {}
        }
    }

    let mut series = Vec::with_capacity(window.day_count() as usize);
    for day in window.iter_days() {
        let (income, expense) = buckets[&day];
        series.push(DailyFlow {
            date: day,
            income,
            expense,
            net: income.checked_sub(&expense)?,
        });
    }

    Ok(series)
}
