//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent business rule violations and domain invariant
/// failures. They are independent of the web/infrastructure layer. None of
/// them is fatal; each is a normal outcome the caller can recover from.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid amount (zero, negative, or unparseable)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Either side of a transfer does not resolve to an existing account
    #[error("Invalid account id(s): from {from_id}, to {to_id}")]
    InvalidAccount { from_id: String, to_id: String },

    /// Insufficient balance for debit operation
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    },

    /// Transfer to same account
    #[error("Cannot transfer to the same account")]
    SameAccountTransfer,

    /// Account creation with an id that is already taken
    #[error("Account id {0} already exists")]
    DuplicateAccountId(String),
}

impl DomainError {
    /// Create an invalid-account error referencing both requested ids.
    pub fn invalid_account(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
        Self::InvalidAccount {
            from_id: from_id.into(),
            to_id: to_id.into(),
        }
    }

    /// Create an insufficient balance error
    pub fn insufficient_balance(
        required: rust_decimal::Decimal,
        available: rust_decimal::Decimal,
    ) -> Self {
        Self::InsufficientBalance {
            required,
            available,
        }
    }

    /// Check if this is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InsufficientBalance { .. }
                | Self::SameAccountTransfer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_balance_error() {
        let err = DomainError::insufficient_balance(dec!(100), dec!(50));

        assert!(err.is_client_error());
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_invalid_account_error_names_both_ids() {
        let err = DomainError::invalid_account("acc-1", "acc-2");

        assert!(!err.is_client_error());
        assert!(err.to_string().contains("acc-1"));
        assert!(err.to_string().contains("acc-2"));
    }
}
