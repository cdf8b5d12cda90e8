//! Lock Registry
//!
//! One mutual-exclusion lock per account id, created on first reference and
//! kept for the lifetime of the registry. The registry never hands out two
//! distinct lock objects for one id; if it did, two transfers could enter
//! the same account's critical section at once and the exclusion guarantee
//! would break.
//!
//! There is deliberately no removal: the map grows with the number of
//! distinct accounts ever referenced, which is bounded by the account
//! population.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// Lazily-populated map from account id to its lock.
///
/// Injectable rather than a process-wide singleton, so every test gets a
/// fresh registry with no cross-test leakage.
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Return the lock for `account_id`, creating it on first reference.
    ///
    /// The insert-if-absent is atomic: concurrent callers racing on an
    /// unseen id all receive the same lock instance.
    pub fn lock_for(&self, account_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(account_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Number of distinct account ids ever referenced.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_id_returns_same_lock() {
        let registry = LockRegistry::new();

        let a = registry.lock_for("acc-1");
        let b = registry.lock_for("acc-1");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_ids_get_distinct_locks() {
        let registry = LockRegistry::new();

        let a = registry.lock_for("acc-1");
        let b = registry.lock_for("acc-2");

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_first_reference_shares_one_lock() {
        let registry = Arc::new(LockRegistry::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move { registry.lock_for("fresh") }));
        }

        let mut locks = Vec::new();
        for handle in handles {
            locks.push(handle.await.unwrap());
        }

        let first = &locks[0];
        assert!(locks.iter().all(|lock| Arc::ptr_eq(first, lock)));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_lock_excludes_second_holder() {
        let registry = LockRegistry::new();

        let lock = registry.lock_for("acc-1");
        let guard = lock.lock().await;

        let again = registry.lock_for("acc-1");
        assert!(again.try_lock().is_err());

        drop(guard);
        assert!(again.try_lock().is_ok());
    }
}
