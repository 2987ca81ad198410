//! The ledger book - accounts and transactions of one business
//!
//! The book is the write side of the domain: it owns validation, so every
//! transaction that reaches the reports went through the same checks. The
//! read side (summaries, series, distribution, statements) is exposed as
//! thin methods over the report functions, always computed fresh from the
//! stored rows.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use core_kernel::{AccountId, BusinessId, Currency, DateRange, MoneyError, Timezone, TransactionId};

use crate::account::{AccountIndex, AccountKind, FinancialAccount};
use crate::aggregate::{summarize_account, summarize_business, AccountSummary};
use crate::distribution::{build_distribution, DistributionEntry};
use crate::error::LedgerError;
use crate::integrity::{self, IntegrityIssue};
use crate::statement::{build_party_statement, PartyStatement, StatementFilter};
use crate::timeseries::{build_daily_series, DailyFlow};
use crate::transaction::{Transaction, TransactionDraft};

/// Accounts and transactions of one business, with validated writes
#[derive(Debug, Clone)]
pub struct LedgerBook {
    business_id: BusinessId,
    currency: Currency,
    accounts: HashMap<AccountId, FinancialAccount>,
    transactions: Vec<Transaction>,
}

impl LedgerBook {
    /// Creates an empty book for a business
    pub fn new(business_id: BusinessId, currency: Currency) -> Self {
        Self {
            business_id,
            currency,
            accounts: HashMap::new(),
            transactions: Vec::new(),
        }
    }

    /// Rebuilds a book from stored rows
    ///
    /// Trusts the rows as-is: no draft validation runs and duplicate
    /// account ids collapse. Run [`LedgerBook::audit`] afterwards when the
    /// rows come from an import rather than this book's own writes.
    pub fn load(
        business_id: BusinessId,
        currency: Currency,
        accounts: Vec<FinancialAccount>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            business_id,
            currency,
            accounts: accounts.into_iter().map(|a| (a.id, a)).collect(),
            transactions,
        }
    }

    /// The owning business
    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }

    /// The book's currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Adds an account to the book
    #[instrument(skip(self, account), fields(business_id = %self.business_id, account_id = %account.id))]
    pub fn add_account(&mut self, account: FinancialAccount) -> Result<(), LedgerError> {
        if account.business_id != self.business_id {
            return Err(LedgerError::ForeignAccount {
                account: account.id.to_string(),
                business: self.business_id.to_string(),
            });
        }
        if self.accounts.contains_key(&account.id) {
            return Err(LedgerError::DuplicateAccount(account.id.to_string()));
        }

        debug!("Adding account to book");
        self.accounts.insert(account.id, account);
        Ok(())
    }

    /// Renames an account
    pub fn rename_account(
        &mut self,
        id: AccountId,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
        account.name = name.into();
        Ok(())
    }

    /// Removes an account that has never been used
    ///
    /// System accounts and accounts referenced by any transaction cannot
    /// be removed; history must keep resolving against real accounts.
    #[instrument(skip(self), fields(business_id = %self.business_id, account_id = %id))]
    pub fn remove_account(&mut self, id: AccountId) -> Result<FinancialAccount, LedgerError> {
        let account = self
            .accounts
            .get(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;

        if account.is_system {
            return Err(LedgerError::SystemAccount(id.to_string()));
        }
        if self.transactions.iter().any(|t| t.is_related_to(id)) {
            return Err(LedgerError::AccountInUse(id.to_string()));
        }

        debug!("Removing account from book");
        self.accounts
            .remove(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    /// Looks up an account by id
    pub fn account(&self, id: AccountId) -> Option<&FinancialAccount> {
        self.accounts.get(&id)
    }

    /// All accounts, oldest first
    pub fn accounts(&self) -> Vec<&FinancialAccount> {
        let mut accounts: Vec<&FinancialAccount> = self.accounts.values().collect();
        accounts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });
        accounts
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Validates and records a draft, returning the new transaction's id
    #[instrument(skip(self, draft), fields(business_id = %self.business_id))]
    pub fn record(&mut self, draft: TransactionDraft) -> Result<TransactionId, LedgerError> {
        self.validate_draft(&draft)?;

        let now = Utc::now();
        let transaction = Transaction {
            id: TransactionId::new_v7(),
            business_id: self.business_id,
            amount: draft.amount,
            date: draft.date.unwrap_or(now),
            description: draft.description,
            mode: draft.mode,
            from_account: draft.from_account,
            to_account: draft.to_account,
            party_id: draft.party_id,
            direction_hint: draft.direction_hint,
            created_at: now,
        };
        let id = transaction.id;

        debug!(transaction_id = %id, "Recording transaction");
        self.transactions.push(transaction);
        Ok(id)
    }

    /// Replaces the contents of an existing transaction
    ///
    /// The id and original entry timestamp survive the edit; everything
    /// else is taken from the draft, which is validated like a fresh
    /// recording.
    #[instrument(skip(self, draft), fields(business_id = %self.business_id, transaction_id = %id))]
    pub fn replace(&mut self, id: TransactionId, draft: TransactionDraft) -> Result<(), LedgerError> {
        self.validate_draft(&draft)?;

        let existing = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LedgerError::TransactionNotFound(id.to_string()))?;

        debug!("Replacing transaction");
        *existing = Transaction {
            id,
            business_id: existing.business_id,
            amount: draft.amount,
            date: draft.date.unwrap_or(existing.date),
            description: draft.description,
            mode: draft.mode,
            from_account: draft.from_account,
            to_account: draft.to_account,
            party_id: draft.party_id,
            direction_hint: draft.direction_hint,
            created_at: existing.created_at,
        };
        Ok(())
    }

    /// Removes a transaction, returning it
    #[instrument(skip(self), fields(business_id = %self.business_id, transaction_id = %id))]
    pub fn remove_transaction(&mut self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let position = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::TransactionNotFound(id.to_string()))?;

        debug!("Removing transaction");
        Ok(self.transactions.remove(position))
    }

    /// All recorded transactions, in entry order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn validate_draft(&self, draft: &TransactionDraft) -> Result<(), LedgerError> {
        if !draft.amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(draft.amount.to_string()));
        }
        if draft.from_account == draft.to_account {
            return Err(LedgerError::SelfTransfer(draft.from_account.to_string()));
        }
        for endpoint in [draft.from_account, draft.to_account] {
            if !self.accounts.contains_key(&endpoint) {
                return Err(LedgerError::AccountNotFound(endpoint.to_string()));
            }
        }
        if draft.amount.currency() != self.currency {
            return Err(MoneyError::CurrencyMismatch(
                draft.amount.currency().to_string(),
                self.currency.to_string(),
            )
            .into());
        }
        Ok(())
    }

    // ========================================================================
    // Reports
    // ========================================================================

    /// Totals for one account, from that account's point of view
    pub fn summarize(&self, id: AccountId) -> Result<AccountSummary, LedgerError> {
        let account = self
            .accounts
            .get(&id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
        summarize_account(&self.transactions, account, self.currency)
    }

    /// Cash in and out of the business as a whole
    pub fn cash_position(&self) -> Result<AccountSummary, LedgerError> {
        summarize_business(&self.transactions, &self.index(), self.currency)
    }

    /// Zero-filled daily income/expense series over a window
    pub fn daily_series(
        &self,
        window: DateRange,
        timezone: Timezone,
    ) -> Result<Vec<DailyFlow>, LedgerError> {
        build_daily_series(
            &self.transactions,
            &self.index(),
            window,
            timezone,
            self.currency,
        )
    }

    /// Positive money-account balances, oldest account first
    pub fn distribution(&self) -> Result<Vec<DistributionEntry>, LedgerError> {
        let accounts: Vec<FinancialAccount> =
            self.accounts().into_iter().cloned().collect();
        build_distribution(&accounts, &self.transactions, self.currency)
    }

    /// Statement for one party account
    pub fn party_statement(
        &self,
        party_account_id: AccountId,
        filter: &StatementFilter,
        now: DateTime<Utc>,
        timezone: Timezone,
        date_format: &str,
    ) -> Result<PartyStatement, LedgerError> {
        let account = self
            .accounts
            .get(&party_account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(party_account_id.to_string()))?;
        if account.kind() != AccountKind::Party {
            return Err(LedgerError::NotAPartyAccount(party_account_id.to_string()));
        }

        build_party_statement(
            &self.transactions,
            account,
            filter,
            now,
            timezone,
            date_format,
            self.currency,
        )
    }

    /// Scans the book for rows that violate the write-time rules
    pub fn audit(&self) -> Vec<IntegrityIssue> {
        let accounts: Vec<FinancialAccount> = self.accounts.values().cloned().collect();
        integrity::audit(&self.transactions, &accounts, self.business_id)
    }

    fn index(&self) -> AccountIndex {
        let accounts: Vec<FinancialAccount> = self.accounts.values().cloned().collect();
        AccountIndex::build(&accounts)
    }
}
