//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the ledger
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests: fixed dates, fixed identifiers, and a small seeded book
//! whose figures every suite can assert exactly.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{
    AccountId, BusinessId, Currency, DateRange, Money, PartyId, Timezone, TransactionId,
};
use domain_ledger::{
    AccountSubtype, Business, CategoryType, FinancialAccount, LedgerBook, MockLedgerPort,
    MoneyType, PartyType, PaymentMode, TransactionDraft,
};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount from a decimal
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// Creates a typical walk-in sale amount
    pub fn usd_sale() -> Money {
        Money::new(dec!(250.00), Currency::USD)
    }

    /// Creates a monthly rent amount
    pub fn usd_rent() -> Money {
        Money::new(dec!(1200.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// Creates a JPY amount (zero decimal places)
    pub fn jpy_10000() -> Money {
        Money::new(dec!(10000), Currency::JPY)
    }

    /// Creates an INR amount for rupee-denominated books
    pub fn inr_5000() -> Money {
        Money::new(dec!(5000.00), Currency::INR)
    }
}

/// Fixture for temporal test data
///
/// All fixed instants live in March 2025 so that windows, statements, and
/// series computed from the seeded book line up without date arithmetic in
/// the tests themselves.
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// An instant on the given March 2025 day, UTC
    pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
    }

    /// The full report month (March 1 to March 31, 2025)
    pub fn report_month() -> DateRange {
        DateRange::new(
            Self::march(1, 0).date_naive(),
            Self::march(31, 0).date_naive(),
        )
        .unwrap()
    }

    /// A trailing seven-day window ending March 10, 2025
    pub fn report_week() -> DateRange {
        DateRange::trailing(Self::march(10, 0).date_naive(), 7).unwrap()
    }

    /// Noon in the middle of the report month
    pub fn mid_month() -> DateTime<Utc> {
        Self::march(15, 12)
    }

    /// An instant before the report month
    pub fn before_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap()
    }

    /// An instant after the report month
    pub fn after_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap()
    }

    /// The UTC timezone
    pub fn utc() -> Timezone {
        Timezone::default()
    }

    /// A timezone with a half-hour offset, for day-bucketing tests
    pub fn kolkata() -> Timezone {
        Timezone::new(chrono_tz::Asia::Kolkata)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic business ID for testing
    pub fn business_id() -> BusinessId {
        BusinessId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic account ID for testing
    pub fn account_id() -> AccountId {
        AccountId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic transaction ID for testing
    pub fn transaction_id() -> TransactionId {
        TransactionId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// Creates a deterministic party ID for testing
    pub fn party_id() -> PartyId {
        PartyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440004").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard business name
    pub fn shop_name() -> &'static str {
        "Corner Grocery"
    }

    /// Standard customer name
    pub fn party_name() -> &'static str {
        "Ravi Textiles"
    }

    /// Standard supplier name
    pub fn supplier_name() -> &'static str {
        "Acme Supplies"
    }

    /// Test phone number
    pub fn phone() -> &'static str {
        "+91 98450 11223"
    }

    /// Test email address
    pub fn email() -> &'static str {
        "ravi@example.com"
    }

    /// Standard transaction note
    pub fn note() -> &'static str {
        "Morning sales"
    }

    /// Date format used for statement day labels
    pub fn date_format() -> &'static str {
        "%d %b %Y"
    }
}

/// A small shop's books with a known chart and a few recorded rows
///
/// The figures are fixed so suites can assert exact totals:
///
/// - Cash: in 1500, out 700, balance 800
/// - Bank: in 800, balance 800
/// - Supplier page: business paid 300, received 0, balance -300
#[derive(Debug, Clone)]
pub struct SeededBook {
    pub business: Business,
    pub book: LedgerBook,
    pub cash: AccountId,
    pub bank: AccountId,
    pub sales: AccountId,
    pub rent: AccountId,
    pub supplier: AccountId,
}

impl SeededBook {
    /// Loads the same business, accounts, and rows into a mock port
    pub async fn port(&self) -> MockLedgerPort {
        MockLedgerPort::with_business(
            self.business.clone(),
            self.book.accounts().into_iter().cloned().collect(),
            self.book.transactions().to_vec(),
        )
        .await
    }
}

/// Fixture for whole-ledger test data
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Creates the standard test business (USD, UTC)
    pub fn business() -> Business {
        Business::new(
            StringFixtures::shop_name(),
            Currency::USD,
            TemporalFixtures::utc(),
        )
    }

    /// Builds the seeded shop book
    ///
    /// Four rows recorded across March 2025: two sales (cash and bank),
    /// one rent payment, and one payment to the supplier.
    pub fn seeded_book() -> SeededBook {
        let business = Self::business();
        let mut book = LedgerBook::new(business.id, business.currency);

        let cash = FinancialAccount::system(
            business.id,
            "Cash",
            AccountSubtype::Money(MoneyType::Cash),
        );
        let bank =
            FinancialAccount::new(business.id, "Bank", AccountSubtype::Money(MoneyType::Online));
        let sales = FinancialAccount::new(
            business.id,
            "Sales",
            AccountSubtype::Category(CategoryType::Income),
        );
        let rent = FinancialAccount::new(
            business.id,
            "Rent",
            AccountSubtype::Category(CategoryType::Expense),
        );
        let supplier = FinancialAccount::new(
            business.id,
            StringFixtures::supplier_name(),
            AccountSubtype::Party(PartyType::Supplier),
        );

        let ids = (cash.id, bank.id, sales.id, rent.id, supplier.id);
        for account in [cash, bank, sales, rent, supplier] {
            book.add_account(account).unwrap();
        }
        let (cash, bank, sales, rent, supplier) = ids;

        book.record(
            TransactionDraft::new(sales, cash, MoneyFixtures::usd(dec!(1500)))
                .dated(TemporalFixtures::march(3, 10))
                .with_description(StringFixtures::note()),
        )
        .unwrap();
        book.record(
            TransactionDraft::new(sales, bank, MoneyFixtures::usd(dec!(800)))
                .dated(TemporalFixtures::march(5, 11))
                .with_description("Card settlement")
                .with_mode(PaymentMode::Online),
        )
        .unwrap();
        book.record(
            TransactionDraft::new(cash, rent, MoneyFixtures::usd(dec!(400)))
                .dated(TemporalFixtures::march(5, 15))
                .with_description("March rent"),
        )
        .unwrap();
        book.record(
            TransactionDraft::new(cash, supplier, MoneyFixtures::usd(dec!(300)))
                .dated(TemporalFixtures::march(8, 9))
                .with_description("Stock purchase"),
        )
        .unwrap();

        SeededBook {
            business,
            book,
            cash,
            bank,
            sales,
            rent,
            supplier,
        }
    }
}
