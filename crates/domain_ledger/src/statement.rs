//! Party statements - filtered, grouped transaction history with totals
//!
//! A statement is the ledger page for one counterparty: every dealing with
//! that party, newest first, grouped by local calendar day with friendly
//! labels for the most recent days. Rows carry the flipped direction
//! labels (OUT = the business paid the party, IN = the business received
//! from them). The totals cover exactly the rows that survived the
//! filters, so a statement narrowed to cash payments sums only cash
//! payments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use core_kernel::{Currency, DateRange, Money, Timezone, TransactionId};

use crate::account::FinancialAccount;
use crate::error::LedgerError;
use crate::perspective::Direction;
use crate::transaction::{PaymentMode, Transaction};

/// Criteria a statement row must satisfy
///
/// All set fields must match at once. The direction is matched against
/// each row's flipped, party-ledger direction, recomputed from the
/// endpoints, never against the stored entry hint.
#[derive(Debug, Clone, Default)]
pub struct StatementFilter {
    /// Keep only rows with this payment mode
    pub mode: Option<PaymentMode>,
    /// Keep only rows with this ledger-page direction
    /// (OUT = the business paid the party)
    pub direction: Option<Direction>,
    /// Keep only rows whose local date falls in this range
    pub range: Option<DateRange>,
}

impl StatementFilter {
    /// Filter by ledger-page direction
    pub fn by_direction(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }

    /// Filter by payment mode
    pub fn by_mode(mode: PaymentMode) -> Self {
        Self {
            mode: Some(mode),
            ..Default::default()
        }
    }

    /// Restricts the statement to a date range
    pub fn between(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// One transaction as shown on the statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    /// Underlying transaction
    pub id: TransactionId,
    /// Effective date
    pub date: DateTime<Utc>,
    /// Free-text note
    pub description: Option<String>,
    /// How the money moved
    pub mode: PaymentMode,
    /// Amount moved
    pub amount: Money,
    /// OUT when the business paid the party, IN when it received
    pub direction: Direction,
}

/// Statement lines sharing one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementGroup {
    /// "Today", "Yesterday", or the formatted date
    pub label: String,
    /// Lines of that day, newest first
    pub lines: Vec<StatementLine>,
}

/// Sums over the filtered statement rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementTotals {
    /// Money the business paid to the party
    pub total_paid: Money,
    /// Money the business received from the party
    pub total_received: Money,
    /// Received minus paid; negative when the business has paid out more
    pub balance: Money,
}

/// A counterparty's filtered transaction history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyStatement {
    /// Day groups, newest day first
    pub groups: Vec<StatementGroup>,
    /// Totals over exactly the rows shown
    pub totals: StatementTotals,
}

impl PartyStatement {
    /// Returns true if no row survived the filters
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Builds the statement for one party account
///
/// Rows not touching the party are dropped first, then each remaining
/// filter must match. Survivors are sorted newest first (entry order
/// breaks ties within a moment) and grouped by their local calendar day.
///
/// # Arguments
///
/// * `transactions` - Candidate rows
/// * `party_account` - The counterparty's ledger account
/// * `filter` - Criteria each row must satisfy
/// * `now` - Reference instant for the "Today"/"Yesterday" labels
/// * `timezone` - Business-local timezone for day grouping
/// * `date_format` - chrono format pattern for older day labels,
///   e.g. `"%d %b %Y"`
/// * `currency` - Currency of the totals
pub fn build_party_statement(
    transactions: &[Transaction],
    party_account: &FinancialAccount,
    filter: &StatementFilter,
    now: DateTime<Utc>,
    timezone: Timezone,
    date_format: &str,
    currency: Currency,
) -> Result<PartyStatement, LedgerError> {
    let mut matched: Vec<(&Transaction, Direction)> = Vec::new();

    for txn in transactions {
        let Some(direction) = txn.perspective_for_party(party_account.id).direction() else {
            continue;
        };
        if filter.mode.is_some_and(|m| m != txn.mode) {
            continue;
        }
        if filter.direction.is_some_and(|d| d != direction) {
            continue;
        }
        if filter
            .range
            .is_some_and(|r| !r.contains(timezone.local_date(txn.date)))
        {
            continue;
        }
        matched.push((txn, direction));
    }

    matched.sort_by(|a, b| {
        b.0.date
            .cmp(&a.0.date)
            .then(b.0.created_at.cmp(&a.0.created_at))
    });

    let mut total_paid = Money::zero(currency);
    let mut total_received = Money::zero(currency);
    for (txn, direction) in &matched {
        match direction {
            Direction::In => total_received = total_received.checked_add(&txn.amount)?,
            Direction::Out => total_paid = total_paid.checked_add(&txn.amount)?,
        }
    }
    let totals = StatementTotals {
        total_paid,
        total_received,
        balance: total_received.checked_sub(&total_paid)?,
    };

    // Descending sort makes rows of the same local day contiguous, so one
    // forward pass groups them in first-appearance order.
    let today = timezone.local_date(now);
    let mut groups: Vec<StatementGroup> = Vec::new();
    let mut current_day: Option<NaiveDate> = None;
    for (txn, direction) in matched {
        let day = timezone.local_date(txn.date);
        let line = StatementLine {
            id: txn.id,
            date: txn.date,
            description: txn.description.clone(),
            mode: txn.mode,
            amount: txn.amount,
            direction,
        };

        if current_day != Some(day) {
            groups.push(StatementGroup {
                label: day_label(day, today, date_format),
                lines: Vec::new(),
            });
            current_day = Some(day);
        }
        if let Some(group) = groups.last_mut() {
            group.lines.push(line);
        }
    }

    Ok(PartyStatement { groups, totals })
}

fn day_label(day: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    if day == today {
        "Today".to_string()
    } else if Some(day) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        day.format(date_format).to_string()
    }
}
