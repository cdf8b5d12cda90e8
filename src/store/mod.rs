//! Account Store
//!
//! Key-value storage for accounts, keyed by account id. The transfer engine
//! only ever talks to the store through the [`AccountStore`] trait; the
//! in-memory implementation below is the production backend for this service
//! and doubles as the test backend.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{Account, DomainError};

/// Storage abstraction for accounts.
///
/// `save` is last-write-wins on the store side; the transfer engine
/// guarantees at most one in-flight writer per account id through its
/// locking discipline.
pub trait AccountStore: Send + Sync {
    /// Look up an account by id. Returns a detached copy.
    fn get(&self, account_id: &str) -> Option<Account>;

    /// Insert a new account.
    ///
    /// # Errors
    /// - `DomainError::DuplicateAccountId` if the id is already taken
    fn create(&self, account: Account) -> Result<(), DomainError>;

    /// Write an account back, replacing any previous state.
    fn save(&self, account: Account);
}

/// In-memory account store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn get(&self, account_id: &str) -> Option<Account> {
        self.accounts.get(account_id).map(|entry| entry.value().clone())
    }

    fn create(&self, account: Account) -> Result<(), DomainError> {
        // Entry API makes the existence check and the insert one atomic
        // step, so exactly one of any number of racing creates wins.
        match self.accounts.entry(account.id().to_string()) {
            Entry::Occupied(_) => Err(DomainError::DuplicateAccountId(account.id().to_string())),
            Entry::Vacant(vacant) => {
                vacant.insert(account);
                Ok(())
            }
        }
    }

    fn save(&self, account: Account) {
        self.accounts.insert(account.id().to_string(), account);
    }
}
