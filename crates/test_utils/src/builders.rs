//! Test Data Builders
//!
//! Provides builder patterns for constructing domain records with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use chrono::{DateTime, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::Fake;

use core_kernel::{AccountId, BusinessId, Money, PartyId, TransactionId};
use domain_ledger::{
    AccountSubtype, CategoryType, Direction, FinancialAccount, MoneyType, PartyType, PaymentMode,
    Transaction,
};
use domain_party::Party;

use crate::fixtures::{IdFixtures, MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test transactions
///
/// The endpoints are required up front, mirroring how a movement is
/// entered; everything else has a fixed default inside the report month.
pub struct TransactionBuilder {
    business_id: BusinessId,
    amount: Money,
    date: DateTime<Utc>,
    description: Option<String>,
    mode: PaymentMode,
    from_account: AccountId,
    to_account: AccountId,
    party_id: Option<PartyId>,
    direction_hint: Option<Direction>,
}

impl TransactionBuilder {
    /// Creates a builder moving the default amount between two accounts
    pub fn new(from_account: AccountId, to_account: AccountId) -> Self {
        Self {
            business_id: IdFixtures::business_id(),
            amount: MoneyFixtures::usd_100(),
            date: TemporalFixtures::mid_month(),
            description: None,
            mode: PaymentMode::Cash,
            from_account,
            to_account,
            party_id: None,
            direction_hint: None,
        }
    }

    /// Sets the owning business
    pub fn for_business(mut self, business_id: BusinessId) -> Self {
        self.business_id = business_id;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the effective date
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the free-text note
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the payment mode
    pub fn with_mode(mut self, mode: PaymentMode) -> Self {
        self.mode = mode;
        self
    }

    /// Links a counterparty
    pub fn with_party(mut self, party_id: PartyId) -> Self {
        self.party_id = Some(party_id);
        self
    }

    /// Sets the stored entry-time direction hint
    pub fn with_direction_hint(mut self, direction: Direction) -> Self {
        self.direction_hint = Some(direction);
        self
    }

    /// Builds the transaction
    ///
    /// The entry timestamp is set to the effective date so that statement
    /// ordering stays deterministic across a built set.
    pub fn build(self) -> Transaction {
        Transaction {
            id: TransactionId::new_v7(),
            business_id: self.business_id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            mode: self.mode,
            from_account: self.from_account,
            to_account: self.to_account,
            party_id: self.party_id,
            direction_hint: self.direction_hint,
            created_at: self.date,
        }
    }
}

/// Builder for constructing test accounts
pub struct AccountBuilder {
    business_id: BusinessId,
    name: String,
    subtype: AccountSubtype,
    is_system: bool,
    created_at: DateTime<Utc>,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBuilder {
    /// Creates a builder for a cash account
    pub fn new() -> Self {
        Self {
            business_id: IdFixtures::business_id(),
            name: "Cash".to_string(),
            subtype: AccountSubtype::Money(MoneyType::Cash),
            is_system: false,
            created_at: TemporalFixtures::march(1, 0),
        }
    }

    /// Builds a cash account
    pub fn cash() -> Self {
        Self::new()
    }

    /// Builds an online money account
    pub fn bank() -> Self {
        Self::new()
            .with_name("Bank")
            .with_subtype(AccountSubtype::Money(MoneyType::Online))
    }

    /// Builds a customer ledger account
    pub fn customer(name: impl Into<String>) -> Self {
        Self::new()
            .with_name(name)
            .with_subtype(AccountSubtype::Party(PartyType::Customer))
    }

    /// Builds a supplier ledger account
    pub fn supplier(name: impl Into<String>) -> Self {
        Self::new()
            .with_name(name)
            .with_subtype(AccountSubtype::Party(PartyType::Supplier))
    }

    /// Builds an income category account
    pub fn income(name: impl Into<String>) -> Self {
        Self::new()
            .with_name(name)
            .with_subtype(AccountSubtype::Category(CategoryType::Income))
    }

    /// Builds an expense category account
    pub fn expense(name: impl Into<String>) -> Self {
        Self::new()
            .with_name(name)
            .with_subtype(AccountSubtype::Category(CategoryType::Expense))
    }

    /// Sets the owning business
    pub fn for_business(mut self, business_id: BusinessId) -> Self {
        self.business_id = business_id;
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the kind-specific detail
    pub fn with_subtype(mut self, subtype: AccountSubtype) -> Self {
        self.subtype = subtype;
        self
    }

    /// Marks the account as a system account
    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Sets the creation timestamp (controls listing order)
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the account
    pub fn build(self) -> FinancialAccount {
        FinancialAccount {
            id: AccountId::new_v7(),
            business_id: self.business_id,
            name: self.name,
            subtype: self.subtype,
            is_system: self.is_system,
            created_at: self.created_at,
        }
    }
}

/// Builder for constructing test registry entries
pub struct PartyBuilder {
    business_id: BusinessId,
    name: String,
    party_type: domain_party::PartyType,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    ledger_account_id: AccountId,
    is_active: bool,
}

impl Default for PartyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyBuilder {
    /// Creates a builder for a customer entry
    pub fn new() -> Self {
        Self {
            business_id: IdFixtures::business_id(),
            name: StringFixtures::party_name().to_string(),
            party_type: domain_party::PartyType::Customer,
            phone: None,
            email: None,
            address: None,
            ledger_account_id: AccountId::new_v7(),
            is_active: true,
        }
    }

    /// Builds a customer entry
    pub fn customer(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// Builds a supplier entry
    pub fn supplier(name: impl Into<String>) -> Self {
        let mut builder = Self::new().with_name(name);
        builder.party_type = domain_party::PartyType::Supplier;
        builder
    }

    /// Creates a builder with faked name and contact details
    ///
    /// The generated entry always passes registry validation.
    pub fn random() -> Self {
        let digits: u64 = (1_000_000_000u64..9_999_999_999u64).fake();
        Self::new()
            .with_name(CompanyName().fake::<String>())
            .with_phone(format!("+91 {digits}"))
            .with_email(SafeEmail().fake::<String>())
    }

    /// Sets the owning business
    pub fn for_business(mut self, business_id: BusinessId) -> Self {
        self.business_id = business_id;
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Links the backing ledger account
    pub fn with_ledger_account(mut self, account_id: AccountId) -> Self {
        self.ledger_account_id = account_id;
        self
    }

    /// Marks the entry as deactivated
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the registry entry
    pub fn build(self) -> Party {
        let mut party = Party::new(
            self.business_id,
            self.name,
            self.party_type,
            self.ledger_account_id,
        );
        party.phone = self.phone;
        party.email = self.email;
        party.address = self.address;
        if !self.is_active {
            party.deactivate();
        }
        party
    }
}
