//! Account type
//!
//! A ledger entry with a unique identifier and a decimal balance. The store
//! owns the authoritative copy; everything handed out of it is a clone, and
//! mutations only become visible once saved back.

use serde::{Deserialize, Serialize};

use super::amount::{Amount, Balance};
use super::error::DomainError;

/// A single ledger account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID
    id: String,

    /// Current balance
    balance: Balance,
}

impl Account {
    /// Create a new account.
    pub fn new(id: impl Into<String>, balance: Balance) -> Self {
        Self {
            id: id.into(),
            balance,
        }
    }

    /// Create a new account with a zero balance.
    pub fn with_zero_balance(id: impl Into<String>) -> Self {
        Self::new(id, Balance::zero())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    /// Check if the account can cover a withdrawal of `amount`.
    pub fn has_sufficient_balance(&self, amount: &Amount) -> bool {
        self.balance.is_sufficient_for(amount)
    }

    /// Return the account with `amount` withdrawn.
    ///
    /// # Errors
    /// - `DomainError::InsufficientBalance` if the balance does not cover it
    pub fn debit(&self, amount: &Amount) -> Result<Account, DomainError> {
        Ok(Self {
            id: self.id.clone(),
            balance: self.balance.debit(amount)?,
        })
    }

    /// Return the account with `amount` deposited.
    pub fn credit(&self, amount: &Amount) -> Account {
        Self {
            id: self.id.clone(),
            balance: self.balance.credit(amount),
        }
    }
}
