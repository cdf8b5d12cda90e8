//! Domain module
//!
//! Core domain types and business rules.

pub mod account;
pub mod amount;
pub mod error;

pub use account::Account;
pub use amount::{Amount, Balance};
pub use error::DomainError;
