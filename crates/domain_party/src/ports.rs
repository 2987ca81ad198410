//! Party Registry Ports
//!
//! This module defines the port interfaces for the party registry, enabling
//! swappable implementations (embedded database, remote sync service, mock).
//!
//! # Architecture
//!
//! The `PartyPort` trait defines all operations the registry needs from its
//! data source. Multiple adapters can implement this trait:
//!
//! - **Embedded Adapter**: Local database on the device
//! - **Sync Adapter**: Remote store behind a sync protocol
//! - **Mock Adapter**: For testing without external dependencies
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_party::ports::PartyPort;
//! use std::sync::Arc;
//!
//! // Application services receive the port trait
//! pub struct RegistryService {
//!     party_port: Arc<dyn PartyPort>,
//! }
//!
//! impl RegistryService {
//!     pub async fn lookup(&self, id: PartyId) -> Result<Party, PortError> {
//!         self.party_port.get_party(id).await
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{AccountId, BusinessId, DomainPort, PartyId, PortError};

use crate::party::{Party, PartyType};

/// Query parameters for finding parties
#[derive(Debug, Clone, Default)]
pub struct PartyQuery {
    /// Keep only parties of this business
    pub business: Option<BusinessId>,
    /// Keep only parties whose name contains this text (case-insensitive)
    pub name: Option<String>,
    /// Keep only parties with this exact phone number
    pub phone: Option<String>,
    /// Filter by relationship type
    pub party_type: Option<PartyType>,
    /// Filter by active status
    pub is_active: Option<bool>,
    /// Limit results
    pub limit: Option<u32>,
    /// Offset for pagination
    pub offset: Option<u32>,
}

impl PartyQuery {
    /// Creates a query for one business's parties
    pub fn by_business(business: BusinessId) -> Self {
        Self {
            business: Some(business),
            ..Default::default()
        }
    }

    /// Creates a query to search by name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Creates a query to find by phone number
    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Default::default()
        }
    }

    /// Adds pagination to the query
    pub fn paginate(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

/// Request for creating a new party
#[derive(Debug, Clone)]
pub struct CreatePartyRequest {
    /// The owning business
    pub business_id: BusinessId,
    /// Display name
    pub name: String,
    /// The relationship with the business
    pub party_type: PartyType,
    /// Primary phone number
    pub phone: Option<String>,
    /// Primary email address
    pub email: Option<String>,
    /// Free-form postal address
    pub address: Option<String>,
    /// The party-kind ledger account backing this entry
    pub ledger_account_id: AccountId,
}

/// Request for updating a party
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePartyRequest {
    /// New display name
    pub name: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New postal address
    pub address: Option<String>,
    /// Whether the party is active
    pub is_active: Option<bool>,
}

/// The main port trait for party registry operations
///
/// This trait defines all operations the registry requires from its
/// underlying data source. Implementations can be embedded (local database)
/// or remote (sync service).
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait PartyPort: DomainPort {
    // ========================================================================
    // Lookup Operations
    // ========================================================================

    /// Retrieves a party by ID
    ///
    /// # Arguments
    ///
    /// * `id` - The party identifier
    ///
    /// # Returns
    ///
    /// The party if found, or `PortError::NotFound`
    async fn get_party(&self, id: PartyId) -> Result<Party, PortError>;

    /// Finds parties matching the query criteria
    ///
    /// # Arguments
    ///
    /// * `query` - Query parameters for filtering
    ///
    /// # Returns
    ///
    /// Matching parties, sorted by name
    async fn find_parties(&self, query: &PartyQuery) -> Result<Vec<Party>, PortError>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Creates a new party
    ///
    /// # Arguments
    ///
    /// * `request` - The party creation request
    ///
    /// # Returns
    ///
    /// The created party with generated ID
    async fn create_party(&self, request: CreatePartyRequest) -> Result<Party, PortError>;

    /// Updates an existing party
    ///
    /// # Arguments
    ///
    /// * `id` - The party identifier
    /// * `request` - The update request; `None` fields are left unchanged
    ///
    /// # Returns
    ///
    /// The updated party
    async fn update_party(
        &self,
        id: PartyId,
        request: UpdatePartyRequest,
    ) -> Result<Party, PortError>;

    /// Deactivates a party (soft delete)
    ///
    /// The entry stays in the registry so history keeps resolving its
    /// name; it stops appearing in active listings.
    ///
    /// # Arguments
    ///
    /// * `id` - The party identifier
    async fn deactivate_party(&self, id: PartyId) -> Result<(), PortError>;
}

/// Extension trait for PartyPort with convenience methods
#[async_trait]
pub trait PartyPortExt: PartyPort {
    /// Finds a single party by exact phone number
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Party>, PortError> {
        let parties = self.find_parties(&PartyQuery::by_phone(phone)).await?;
        Ok(parties.into_iter().next())
    }

    /// Creates a customer entry
    async fn create_customer(
        &self,
        business_id: BusinessId,
        name: &str,
        ledger_account_id: AccountId,
    ) -> Result<Party, PortError> {
        self.create_party(CreatePartyRequest {
            business_id,
            name: name.to_string(),
            party_type: PartyType::Customer,
            phone: None,
            email: None,
            address: None,
            ledger_account_id,
        })
        .await
    }

    /// Creates a supplier entry
    async fn create_supplier(
        &self,
        business_id: BusinessId,
        name: &str,
        ledger_account_id: AccountId,
    ) -> Result<Party, PortError> {
        self.create_party(CreatePartyRequest {
            business_id,
            name: name.to_string(),
            party_type: PartyType::Supplier,
            phone: None,
            email: None,
            address: None,
            ledger_account_id,
        })
        .await
    }

    /// Lists the active parties of a business, sorted by name
    async fn active_parties(&self, business_id: BusinessId) -> Result<Vec<Party>, PortError> {
        let query = PartyQuery {
            is_active: Some(true),
            ..PartyQuery::by_business(business_id)
        };
        self.find_parties(&query).await
    }
}

// Blanket implementation for all PartyPort implementors
impl<T: PartyPort + ?Sized> PartyPortExt for T {}

/// Mock implementation of PartyPort for testing
///
/// This adapter stores parties in memory and is useful for unit testing
/// without database dependencies.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use chrono::Utc;
    use tokio::sync::RwLock;

    use crate::validation::PartyValidator;

    /// In-memory mock implementation of PartyPort
    #[derive(Debug, Default)]
    pub struct MockPartyPort {
        parties: Arc<RwLock<HashMap<PartyId, Party>>>,
    }

    impl MockPartyPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with parties for testing
        pub async fn with_parties(parties: Vec<Party>) -> Self {
            let port = Self::new();
            for party in parties {
                port.parties.write().await.insert(party.id, party);
            }
            port
        }
    }

    impl DomainPort for MockPartyPort {}

    #[async_trait]
    impl PartyPort for MockPartyPort {
        async fn get_party(&self, id: PartyId) -> Result<Party, PortError> {
            self.parties
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Party", id))
        }

        async fn find_parties(&self, query: &PartyQuery) -> Result<Vec<Party>, PortError> {
            let needle = query.name.as_ref().map(|n| n.to_lowercase());
            let parties = self.parties.read().await;
            let mut results: Vec<Party> = parties
                .values()
                .filter(|p| {
                    if let Some(business) = query.business {
                        if p.business_id != business {
                            return false;
                        }
                    }
                    if let Some(ref needle) = needle {
                        if !p.name.to_lowercase().contains(needle.as_str()) {
                            return false;
                        }
                    }
                    if let Some(ref phone) = query.phone {
                        if p.phone.as_ref() != Some(phone) {
                            return false;
                        }
                    }
                    if let Some(party_type) = query.party_type {
                        if p.party_type != party_type {
                            return false;
                        }
                    }
                    if let Some(is_active) = query.is_active {
                        if p.is_active != is_active {
                            return false;
                        }
                    }
                    true
                })
                .cloned()
                .collect();

            results.sort_by(|a, b| a.name.cmp(&b.name));

            // Apply pagination
            if let Some(offset) = query.offset {
                results = results.into_iter().skip(offset as usize).collect();
            }
            if let Some(limit) = query.limit {
                results = results.into_iter().take(limit as usize).collect();
            }

            Ok(results)
        }

        async fn create_party(&self, request: CreatePartyRequest) -> Result<Party, PortError> {
            let mut party = Party::new(
                request.business_id,
                request.name,
                request.party_type,
                request.ledger_account_id,
            );
            party.phone = request.phone;
            party.email = request.email;
            party.address = request.address;

            PartyValidator::validate(&party)
                .into_result()
                .map_err(|e| PortError::validation(e.to_string()))?;

            let mut parties = self.parties.write().await;
            if parties
                .values()
                .any(|p| p.ledger_account_id == party.ledger_account_id)
            {
                return Err(PortError::conflict(
                    "A party is already linked to this ledger account",
                ));
            }
            parties.insert(party.id, party.clone());
            Ok(party)
        }

        async fn update_party(
            &self,
            id: PartyId,
            request: UpdatePartyRequest,
        ) -> Result<Party, PortError> {
            let mut parties = self.parties.write().await;
            let party = parties
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Party", id))?;

            if let Some(name) = request.name {
                party.name = name;
            }
            if let Some(phone) = request.phone {
                party.phone = Some(phone);
            }
            if let Some(email) = request.email {
                party.email = Some(email);
            }
            if let Some(address) = request.address {
                party.address = Some(address);
            }
            if let Some(is_active) = request.is_active {
                party.is_active = is_active;
            }
            party.updated_at = Utc::now();

            Ok(party.clone())
        }

        async fn deactivate_party(&self, id: PartyId) -> Result<(), PortError> {
            let mut parties = self.parties.write().await;
            let party = parties
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Party", id))?;
            party.deactivate();
            Ok(())
        }
    }
}
