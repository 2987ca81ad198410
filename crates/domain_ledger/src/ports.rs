//! Ledger Domain Ports
//!
//! This module defines the port interfaces for the ledger domain, enabling
//! swappable implementations (embedded database, remote sync service, mock).
//!
//! # Architecture
//!
//! The `LedgerPort` trait defines all operations the ledger domain needs
//! from its data source. Multiple adapters can implement this trait:
//!
//! - **Embedded Adapter**: Local database on the device
//! - **Sync Adapter**: Remote store behind a sync protocol
//! - **Mock Adapter**: For testing without external dependencies
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_ledger::ports::{LedgerPort, LedgerPortExt};
//! use std::sync::Arc;
//!
//! // Application services receive the port trait
//! pub struct ReportService {
//!     ledger_port: Arc<dyn LedgerPort>,
//! }
//!
//! impl ReportService {
//!     pub async fn cash_position(&self, business_id: BusinessId) -> Result<AccountSummary, PortError> {
//!         let book = self.ledger_port.load_book(business_id).await?;
//!         book.cash_position().map_err(|e| PortError::internal(e.to_string()))
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{AccountId, BusinessId, DateRange, DomainPort, PartyId, PortError, TransactionId};

use crate::account::FinancialAccount;
use crate::book::LedgerBook;
use crate::business::Business;
use crate::perspective::Direction;
use crate::transaction::{PaymentMode, Transaction};

/// Query parameters for finding transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Keep only rows with this account as either endpoint
    pub account: Option<AccountId>,
    /// Keep only rows linked to this counterparty
    pub party: Option<PartyId>,
    /// Keep only rows whose business-local date falls in this range
    pub date_range: Option<DateRange>,
    /// Keep only rows with this payment mode
    pub mode: Option<PaymentMode>,
    /// Keep only rows whose stored entry hint matches. The hint is what
    /// the user picked when entering the row; report-grade direction is
    /// recomputed from the endpoints and may disagree.
    pub direction: Option<Direction>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl TransactionQuery {
    /// Creates a query for one account's rows
    pub fn by_account(account: AccountId) -> Self {
        Self {
            account: Some(account),
            ..Default::default()
        }
    }

    /// Creates a query for one counterparty's rows
    pub fn by_party(party: PartyId) -> Self {
        Self {
            party: Some(party),
            ..Default::default()
        }
    }

    /// Restricts the query to a local date range
    pub fn between(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

#[async_trait]
pub trait LedgerPort: DomainPort {
    // ========================================================================
    // Business Operations
    // ========================================================================

    /// Retrieves a business by ID
    ///
    /// # Arguments
    ///
    /// * `id` - The business identifier
    ///
    /// # Returns
    ///
    /// The business if found, or `PortError::NotFound`
    async fn fetch_business(&self, id: BusinessId) -> Result<Business, PortError>;

    /// Creates or updates a business
    ///
    /// # Arguments
    ///
    /// * `business` - The business to store
    async fn save_business(&self, business: Business) -> Result<(), PortError>;

    // ========================================================================
    // Account Operations
    // ========================================================================

    /// Retrieves all accounts of a business
    ///
    /// # Arguments
    ///
    /// * `business_id` - The owning business
    ///
    /// # Returns
    ///
    /// All stored accounts, in no particular order
    async fn fetch_accounts(&self, business_id: BusinessId)
        -> Result<Vec<FinancialAccount>, PortError>;

    /// Creates or updates an account
    ///
    /// # Arguments
    ///
    /// * `account` - The account to store
    async fn save_account(&self, account: FinancialAccount) -> Result<(), PortError>;

    /// Deletes an account
    ///
    /// The caller is responsible for the domain rules (system accounts,
    /// accounts with history); the store only removes the row.
    ///
    /// # Arguments
    ///
    /// * `business_id` - The owning business
    /// * `id` - The account to delete
    async fn delete_account(&self, business_id: BusinessId, id: AccountId)
        -> Result<(), PortError>;

    // ========================================================================
    // Transaction Operations
    // ========================================================================

    /// Finds transactions matching the query criteria
    ///
    /// # Arguments
    ///
    /// * `business_id` - The owning business
    /// * `query` - Query parameters for filtering
    ///
    /// # Returns
    ///
    /// Matching transactions, newest first
    async fn fetch_transactions(
        &self,
        business_id: BusinessId,
        query: &TransactionQuery,
    ) -> Result<Vec<Transaction>, PortError>;

    /// Creates or updates a transaction
    ///
    /// # Arguments
    ///
    /// * `transaction` - The transaction to store
    async fn save_transaction(&self, transaction: Transaction) -> Result<(), PortError>;

    /// Deletes a transaction
    ///
    /// # Arguments
    ///
    /// * `business_id` - The owning business
    /// * `id` - The transaction to delete
    async fn delete_transaction(
        &self,
        business_id: BusinessId,
        id: TransactionId,
    ) -> Result<(), PortError>;
}

/// Extension trait for LedgerPort with convenience methods
#[async_trait]
pub trait LedgerPortExt: LedgerPort {
    /// Fetches every row touching one account
    async fn fetch_account_transactions(
        &self,
        business_id: BusinessId,
        account: AccountId,
    ) -> Result<Vec<Transaction>, PortError> {
        self.fetch_transactions(business_id, &TransactionQuery::by_account(account))
            .await
    }

    /// Fetches every row linked to one counterparty
    async fn fetch_party_transactions(
        &self,
        business_id: BusinessId,
        party: PartyId,
    ) -> Result<Vec<Transaction>, PortError> {
        self.fetch_transactions(business_id, &TransactionQuery::by_party(party))
            .await
    }

    /// Loads the full book of a business into memory
    ///
    /// Assembles a [`LedgerBook`] from the stored business, accounts, and
    /// transactions. Stored rows are trusted as-is; callers that suspect
    /// imported data can run the book's audit afterwards.
    async fn load_book(&self, business_id: BusinessId) -> Result<LedgerBook, PortError> {
        let business = self.fetch_business(business_id).await?;
        let accounts = self.fetch_accounts(business_id).await?;
        let transactions = self
            .fetch_transactions(business_id, &TransactionQuery::default())
            .await?;
        Ok(LedgerBook::load(
            business_id,
            business.currency,
            accounts,
            transactions,
        ))
    }
}

// Blanket implementation for all LedgerPort implementors
impl<T: LedgerPort + ?Sized> LedgerPortExt for T {}

/// Mock implementation of LedgerPort for testing
///
/// This adapter stores books in memory and is useful for unit testing
/// without database dependencies.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tracing::{debug, instrument};

    /// In-memory mock implementation of LedgerPort
    #[derive(Debug, Default)]
    pub struct MockLedgerPort {
        businesses: Arc<RwLock<HashMap<BusinessId, Business>>>,
        accounts: Arc<RwLock<HashMap<BusinessId, Vec<FinancialAccount>>>>,
        transactions: Arc<RwLock<HashMap<BusinessId, Vec<Transaction>>>>,
    }

    impl MockLedgerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with one business's books for testing
        pub async fn with_business(
            business: Business,
            accounts: Vec<FinancialAccount>,
            transactions: Vec<Transaction>,
        ) -> Self {
            let port = Self::new();
            let id = business.id;
            port.businesses.write().await.insert(id, business);
            port.accounts.write().await.insert(id, accounts);
            port.transactions.write().await.insert(id, transactions);
            port
        }
    }

    impl DomainPort for MockLedgerPort {}

    #[async_trait]
    impl LedgerPort for MockLedgerPort {
        #[instrument(skip(self), fields(business_id = %id))]
        async fn fetch_business(&self, id: BusinessId) -> Result<Business, PortError> {
            debug!("Fetching business by ID");
            self.businesses
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Business", id))
        }

        async fn save_business(&self, business: Business) -> Result<(), PortError> {
            self.businesses
                .write()
                .await
                .insert(business.id, business);
            Ok(())
        }

        #[instrument(skip(self), fields(business_id = %business_id))]
        async fn fetch_accounts(
            &self,
            business_id: BusinessId,
        ) -> Result<Vec<FinancialAccount>, PortError> {
            debug!("Fetching accounts for business");
            Ok(self
                .accounts
                .read()
                .await
                .get(&business_id)
                .cloned()
                .unwrap_or_default())
        }

        async fn save_account(&self, account: FinancialAccount) -> Result<(), PortError> {
            let mut accounts = self.accounts.write().await;
            let slot = accounts.entry(account.business_id).or_default();
            match slot.iter().position(|a| a.id == account.id) {
                Some(i) => slot[i] = account,
                None => slot.push(account),
            }
            Ok(())
        }

        async fn delete_account(
            &self,
            business_id: BusinessId,
            id: AccountId,
        ) -> Result<(), PortError> {
            let mut accounts = self.accounts.write().await;
            let slot = accounts
                .get_mut(&business_id)
                .ok_or_else(|| PortError::not_found("Business", business_id))?;
            let before = slot.len();
            slot.retain(|a| a.id != id);
            if slot.len() == before {
                return Err(PortError::not_found("Account", id));
            }
            Ok(())
        }

        #[instrument(skip(self, query), fields(business_id = %business_id))]
        async fn fetch_transactions(
            &self,
            business_id: BusinessId,
            query: &TransactionQuery,
        ) -> Result<Vec<Transaction>, PortError> {
            debug!("Fetching transactions for business");

            // The local-date filter needs the business's timezone.
            let timezone = match query.date_range {
                Some(_) => Some(self.fetch_business(business_id).await?.timezone),
                None => None,
            };

            let transactions = self.transactions.read().await;
            let mut results: Vec<Transaction> = transactions
                .get(&business_id)
                .map(|rows| rows.as_slice())
                .unwrap_or_default()
                .iter()
                .filter(|t| {
                    if let Some(account) = query.account {
                        if !t.is_related_to(account) {
                            return false;
                        }
                    }
                    if let Some(party) = query.party {
                        if t.party_id != Some(party) {
                            return false;
                        }
                    }
                    if let (Some(range), Some(tz)) = (query.date_range, timezone) {
                        if !range.contains(tz.local_date(t.date)) {
                            return false;
                        }
                    }
                    if let Some(mode) = query.mode {
                        if t.mode != mode {
                            return false;
                        }
                    }
                    if let Some(direction) = query.direction {
                        if t.direction_hint != Some(direction) {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect();

            results.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

            // Apply pagination
            if let Some(offset) = query.offset {
                results = results.into_iter().skip(offset as usize).collect();
            }
            if let Some(limit) = query.limit {
                results = results.into_iter().take(limit as usize).collect();
            }

            Ok(results)
        }

        async fn save_transaction(&self, transaction: Transaction) -> Result<(), PortError> {
            let mut transactions = self.transactions.write().await;
            let slot = transactions.entry(transaction.business_id).or_default();
            match slot.iter().position(|t| t.id == transaction.id) {
                Some(i) => slot[i] = transaction,
                None => slot.push(transaction),
            }
            Ok(())
        }

        async fn delete_transaction(
            &self,
            business_id: BusinessId,
            id: TransactionId,
        ) -> Result<(), PortError> {
            let mut transactions = self.transactions.write().await;
            let slot = transactions
                .get_mut(&business_id)
                .ok_or_else(|| PortError::not_found("Business", business_id))?;
            let before = slot.len();
            slot.retain(|t| t.id != id);
            if slot.len() == before {
                return Err(PortError::not_found("Transaction", id));
            }
            Ok(())
        }
    }
}
