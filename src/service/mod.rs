//! Service module
//!
//! The transfer engine and the account operations exposed to the API layer.

mod transfer;


pub use transfer::AccountService;
