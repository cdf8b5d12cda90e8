//! Transfer engine
//!
//! Applies a balance transfer between two accounts exactly once, end to end,
//! or not at all. Correctness under concurrency rests on two rules:
//!
//! 1. Every account has exactly one lock, handed out by the
//!    [`LockRegistry`], and both account locks are held for the whole
//!    read-validate-mutate-persist-notify sequence.
//! 2. The two locks are always acquired in canonical (lexicographic) id
//!    order, regardless of the direction of the transfer. Any two transfers
//!    over intersecting account pairs therefore request the locks in the
//!    same global order, which rules out circular wait.
//!
//! Transfers over disjoint account pairs share no lock and run their
//! critical sections in parallel.

use std::sync::Arc;

use crate::domain::{Account, Amount, DomainError};
use crate::locks::LockRegistry;
use crate::notification::NotificationSink;
use crate::store::AccountStore;

/// Account operations: creation, lookup, and the concurrent transfer engine.
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    sink: Arc<dyn NotificationSink>,
    locks: LockRegistry,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            store,
            sink,
            locks: LockRegistry::new(),
        }
    }

    /// Register a new account.
    ///
    /// # Errors
    /// - `DomainError::DuplicateAccountId` if the id is already taken
    pub fn create_account(&self, account: Account) -> Result<(), DomainError> {
        self.store.create(account)
    }

    /// Look up an account by id.
    pub fn get_account(&self, account_id: &str) -> Option<Account> {
        self.store.get(account_id)
    }

    /// Transfer `amount` from one account to another.
    ///
    /// Positivity of the amount is enforced by the [`Amount`] type before
    /// this call. Transfers between an account and itself are rejected
    /// up front; a naive two-lock acquisition of one lock would wait on
    /// itself forever.
    ///
    /// Both account states are re-read after the locks are held — anything
    /// read earlier may be stale by the time the locks are obtained. On any
    /// failure inside the critical section no mutation and no notification
    /// has happened; the lock guards are released on every exit path.
    pub async fn transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Amount,
    ) -> Result<(), DomainError> {
        tracing::info!(from_id, to_id, %amount, "initiating transfer");

        if from_id == to_id {
            tracing::warn!(from_id, "transfer rejected: same account on both sides");
            return Err(DomainError::SameAccountTransfer);
        }

        // Canonical lock order over account ids.
        let (first_id, second_id) = if from_id < to_id {
            (from_id, to_id)
        } else {
            (to_id, from_id)
        };

        let first_lock = self.locks.lock_for(first_id);
        let second_lock = self.locks.lock_for(second_id);

        // Guards drop in reverse declaration order: second is released
        // before first, on success and on every error path.
        let _first_guard = first_lock.lock().await;
        let _second_guard = second_lock.lock().await;

        let from = self.store.get(from_id);
        let to = self.store.get(to_id);

        let (Some(from), Some(to)) = (from, to) else {
            tracing::warn!(from_id, to_id, "transfer rejected: account(s) not found");
            return Err(DomainError::invalid_account(from_id, to_id));
        };

        let from = from.debit(&amount).inspect_err(|_| {
            tracing::warn!(from_id, %amount, "transfer rejected: insufficient balance");
        })?;
        let to = to.credit(&amount);

        self.store.save(from.clone());
        self.store.save(to.clone());

        tracing::info!(from_id, to_id, %amount, "transfer committed");

        self.sink.notify(
            &from,
            &format!("Transferred {} to account {}", amount, to_id),
        );
        self.sink.notify(
            &to,
            &format!("Received {} from account {}", amount, from_id),
        );

        Ok(())
    }
}
