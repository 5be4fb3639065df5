//! Account repository
//!
//! In-memory concurrent store of accounts, keyed by identifier. Data lives
//! for the lifetime of the process only.
//!
//! Each account's balance and transaction history must mutate as a unit, so
//! all mutation goes through [`AccountRepository::with_account`], which holds
//! the map entry for the duration of the closure and thereby serializes
//! writers per account. Reads return cloned snapshots and never block writers
//! for longer than the copy.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{Account, DomainError};

/// Thread-safe in-memory account store.
#[derive(Debug, Default)]
pub struct AccountRepository {
    accounts: DashMap<Uuid, Account>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Insert a new account.
    ///
    /// Duplicate identifiers are rejected explicitly rather than silently
    /// ignored or overwritten.
    pub fn insert(&self, account: Account) -> Result<(), DomainError> {
        match self.accounts.entry(account.id()) {
            Entry::Occupied(_) => Err(DomainError::AccountAlreadyExists(account.id())),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Look up an account by id, returning a snapshot. Never panics on miss.
    pub fn get(&self, id: Uuid) -> Option<Account> {
        self.accounts.get(&id).map(|entry| entry.value().clone())
    }

    /// Snapshot of all current accounts.
    pub fn get_all(&self) -> Vec<Account> {
        self.accounts.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Remove an account. Returns whether it was present.
    pub fn remove(&self, id: Uuid) -> bool {
        self.accounts.remove(&id).is_some()
    }

    /// Run a mutation against one account under its entry lock.
    ///
    /// This is the only mutation path: balance and transaction-set updates
    /// inside the closure cannot interleave with another writer on the same
    /// account. Fails with `AccountNotFound` on miss.
    pub fn with_account<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Account) -> R,
    ) -> Result<R, DomainError> {
        match self.accounts.get_mut(&id) {
            Some(mut entry) => Ok(f(entry.value_mut())),
            None => Err(DomainError::AccountNotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
