//! services/api/src/adapters/store.rs
//!
//! This module contains the in-memory account store, the concrete
//! implementation of the `AccountStore` port from the `core` crate.
//! Accounts live for the lifetime of the process; there is no persistence
//! across restarts.

use async_trait::async_trait;
use basket_core::domain::Account;
use basket_core::ports::{AccountStore, PortError, PortResult};
use std::collections::HashMap;
use tokio::sync::RwLock;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An in-memory account store that implements the `AccountStore` port.
///
/// The lock guards the map itself; a handler's read-modify-write of a
/// single account is not atomic across the `get`/`set` pair. Two requests
/// racing on the same account can interleave, which the design accepts.
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    /// Creates an empty `MemoryAccountStore`.
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, account: Account) -> PortResult<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(PortError::Duplicate(account.email));
        }
        accounts.insert(account.email.clone(), account);
        Ok(())
    }

    async fn get(&self, email: &str) -> PortResult<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .get(email)
            .cloned()
            .ok_or_else(|| PortError::NotFound(email.to_string()))
    }

    async fn set(&self, email: &str, account: Account) -> PortResult<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(email.to_string(), account);
        Ok(())
    }

    async fn delete(&self, email: &str) -> PortResult<()> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(email)
            .map(|_| ())
            .ok_or_else(|| PortError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> Account {
        Account {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            categories: Vec::new(),
            products: Vec::new(),
        }
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = MemoryAccountStore::new();
        store.insert(account("a@b.c")).await.unwrap();
        let err = store.insert(account("a@b.c")).await.unwrap_err();
        assert!(matches!(err, PortError::Duplicate(_)));
    }

    #[tokio::test]
    async fn get_missing_account_is_not_found() {
        let store = MemoryAccountStore::new();
        let err = store.get("ghost@example.com").await.unwrap_err();
        assert!(matches!(err, PortError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_overwrites_existing_account() {
        let store = MemoryAccountStore::new();
        store.insert(account("a@b.c")).await.unwrap();
        let mut updated = account("a@b.c");
        updated.password_hash = "new-hash".to_string();
        store.set("a@b.c", updated).await.unwrap();
        let fetched = store.get("a@b.c").await.unwrap();
        assert_eq!(fetched.password_hash, "new-hash");
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = MemoryAccountStore::new();
        store.insert(account("a@b.c")).await.unwrap();
        store.delete("a@b.c").await.unwrap();
        assert!(store.get("a@b.c").await.is_err());
    }
}
