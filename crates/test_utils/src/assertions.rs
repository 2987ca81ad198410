//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use chrono::NaiveDate;

use core_kernel::{DateRange, Money};
use domain_ledger::{AccountSummary, DailyFlow};

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is negative
pub fn assert_money_negative(money: &Money) {
    assert!(
        money.is_negative(),
        "Expected negative money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts an account summary's totals and derived balance in one call
pub fn assert_summary_totals(summary: &AccountSummary, total_in: Money, total_out: Money) {
    assert_eq!(
        summary.total_in, total_in,
        "total_in mismatch: got {}, expected {}",
        summary.total_in, total_in
    );
    assert_eq!(
        summary.total_out, total_out,
        "total_out mismatch: got {}, expected {}",
        summary.total_out, total_out
    );
    assert_eq!(
        summary.balance(),
        total_in - total_out,
        "balance does not equal in minus out"
    );
}

/// Asserts that two summaries mirror each other
///
/// Over a transaction set whose endpoints are exactly the two observed
/// accounts, what flows into one is what flows out of the other.
pub fn assert_summaries_mirror(a: &AccountSummary, b: &AccountSummary) {
    assert_eq!(
        a.total_in, b.total_out,
        "first summary's inflow ({}) doesn't match second's outflow ({})",
        a.total_in, b.total_out
    );
    assert_eq!(
        a.total_out, b.total_in,
        "first summary's outflow ({}) doesn't match second's inflow ({})",
        a.total_out, b.total_in
    );
}

/// Asserts that a daily series covers a window exactly
///
/// The series must hold one entry per calendar day of the window, in
/// ascending order, with each day's net equal to income minus expense.
pub fn assert_series_covers(series: &[DailyFlow], window: &DateRange) {
    assert_eq!(
        series.len() as i64,
        window.day_count(),
        "series length {} doesn't match window of {} days",
        series.len(),
        window.day_count()
    );
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        assert_eq!(first.date, window.start, "series doesn't start at the window");
        assert_eq!(last.date, window.end, "series doesn't end at the window");
    }
    for pair in series.windows(2) {
        assert!(
            pair[0].date < pair[1].date,
            "series dates out of order: {} before {}",
            pair[0].date,
            pair[1].date
        );
    }
    for day in series {
        assert_eq!(
            day.net,
            day.income - day.expense,
            "net on {} doesn't equal income minus expense",
            day.date
        );
    }
}

/// Asserts that a DateRange contains a specific date
pub fn assert_range_contains(range: &DateRange, date: NaiveDate) {
    assert!(
        range.contains(date),
        "Range {:?} does not contain date {}",
        range,
        date
    );
}

/// Asserts that a DateRange does not contain a specific date
pub fn assert_range_excludes(range: &DateRange, date: NaiveDate) {
    assert!(
        !range.contains(date),
        "Range {:?} unexpectedly contains date {}",
        range,
        date
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err matching {}, got Ok({:?})",
                stringify!($pattern),
                value
            ),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
