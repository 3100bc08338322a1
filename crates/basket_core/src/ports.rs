//! crates/basket_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or APIs.

use async_trait::async_trait;

use crate::domain::Account;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("An account with this email already exists: {0}")]
    Duplicate(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Key-value storage for accounts, keyed by email.
///
/// Handlers read an account, transform it with the pure core functions,
/// and write it back with `set`. The store itself enforces nothing beyond
/// email uniqueness at `insert`; concurrent read-modify-write of the same
/// account is a documented limitation of the in-memory backend.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Stores a new account. Fails with `PortError::Duplicate` if an
    /// account with the same email already exists.
    async fn insert(&self, account: Account) -> PortResult<()>;

    /// Fetches the account for `email`, or `PortError::NotFound`.
    async fn get(&self, email: &str) -> PortResult<Account>;

    /// Unconditionally replaces the account stored under `email`.
    async fn set(&self, email: &str, account: Account) -> PortResult<()>;

    /// Removes the account stored under `email`, or `PortError::NotFound`.
    async fn delete(&self, email: &str) -> PortResult<()>;
}
