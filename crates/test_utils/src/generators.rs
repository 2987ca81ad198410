//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants: positive amounts, distinct
//! endpoints, and dates inside a known calendar year.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use core_kernel::{AccountId, BusinessId, Currency, DateRange, Money, PartyId};
use domain_ledger::{AccountSubtype, CategoryType, MoneyType, PartyType, PaymentMode, Transaction};

use crate::builders::TransactionBuilder;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
        Just(Currency::SGD),
        Just(Currency::HKD),
    ]
}

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values with positive amounts
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating valid positive USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating payment modes
pub fn payment_mode_strategy() -> impl Strategy<Value = PaymentMode> {
    prop_oneof![Just(PaymentMode::Cash), Just(PaymentMode::Online)]
}

/// Strategy for generating every account subtype
pub fn account_subtype_strategy() -> impl Strategy<Value = AccountSubtype> {
    prop_oneof![
        Just(AccountSubtype::Money(MoneyType::Cash)),
        Just(AccountSubtype::Money(MoneyType::Online)),
        Just(AccountSubtype::Money(MoneyType::Cheque)),
        Just(AccountSubtype::Party(PartyType::Customer)),
        Just(AccountSubtype::Party(PartyType::Supplier)),
        Just(AccountSubtype::Party(PartyType::Employee)),
        Just(AccountSubtype::Party(PartyType::Other)),
        Just(AccountSubtype::Category(CategoryType::Income)),
        Just(AccountSubtype::Category(CategoryType::Expense)),
        Just(AccountSubtype::Category(CategoryType::Asset)),
        Just(AccountSubtype::Category(CategoryType::Equity)),
        Just(AccountSubtype::Category(CategoryType::Adjustment)),
    ]
}

/// Strategy for generating dates within 2025
pub fn date_in_2025_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating timestamps within 2025
pub fn timestamp_2025_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64, 0u32..24u32).prop_map(|(days, hour)| {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, 0, 0).unwrap() + Duration::days(days)
    })
}

/// Strategy for generating valid date ranges (start never after end)
pub fn date_range_strategy() -> impl Strategy<Value = DateRange> {
    (date_in_2025_strategy(), 0i64..60i64).prop_map(|(start, length)| {
        DateRange::new(start, start + Duration::days(length)).unwrap()
    })
}

/// Strategy for generating AccountId
pub fn account_id_strategy() -> impl Strategy<Value = AccountId> {
    any::<[u8; 16]>().prop_map(|bytes| AccountId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating BusinessId
pub fn business_id_strategy() -> impl Strategy<Value = BusinessId> {
    any::<[u8; 16]>().prop_map(|bytes| BusinessId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating PartyId
pub fn party_id_strategy() -> impl Strategy<Value = PartyId> {
    any::<[u8; 16]>().prop_map(|bytes| PartyId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating a set of movements between two fixed accounts
///
/// Each generated row runs in one direction or the other between the same
/// pair, with a positive USD amount and a 2025 date. Useful for checking
/// that totals mirror between the two endpoints.
pub fn transaction_set_strategy(
    business: BusinessId,
    first: AccountId,
    second: AccountId,
) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(
        (any::<bool>(), positive_amount_minor_strategy(), 0i64..365i64),
        0..40,
    )
    .prop_map(move |rows| {
        rows.into_iter()
            .map(|(forward, minor, days)| {
                let (from, to) = if forward {
                    (first, second)
                } else {
                    (second, first)
                };
                let date =
                    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() + Duration::days(days);
                TransactionBuilder::new(from, to)
                    .for_business(business)
                    .with_amount(Money::from_minor(minor, Currency::USD))
                    .on(date)
                    .build()
            })
            .collect()
    })
}

/// Strategy for generating party names that pass registry validation
pub fn party_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,12})?".prop_map(|s| s)
}

/// Strategy for generating digit-only phone numbers
pub fn phone_digits_strategy() -> impl Strategy<Value = String> {
    "[0-9]{7,15}".prop_map(|s| s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn positive_money_is_always_positive(money in positive_money_strategy()) {
            prop_assert!(money.amount() > Decimal::ZERO);
        }

        #[test]
        fn date_range_spans_at_least_one_day(range in date_range_strategy()) {
            prop_assert!(range.start <= range.end);
            prop_assert!(range.day_count() >= 1);
        }

        #[test]
        fn generated_movements_obey_the_write_rules(
            transactions in transaction_set_strategy(
                BusinessId::from_uuid(uuid::Uuid::from_u128(1)),
                AccountId::from_uuid(uuid::Uuid::from_u128(2)),
                AccountId::from_uuid(uuid::Uuid::from_u128(3)),
            )
        ) {
            for txn in &transactions {
                prop_assert!(txn.amount.is_positive());
                prop_assert!(!txn.is_self_transfer());
            }
        }

        #[test]
        fn generated_phones_are_all_digits(phone in phone_digits_strategy()) {
            prop_assert!(phone.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(phone.len() >= 7);
        }
    }
}
