//! Core Kernel - Foundational types and utilities for the bookkeeping system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Temporal types for business-local calendar handling
//! - Common identifiers and value objects
//! - Port infrastructure for storage adapters

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{AccountId, BusinessId, PartyId, TransactionId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DomainPort, PortError};
pub use temporal::{DateRange, TemporalError, Timezone};
