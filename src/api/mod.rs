//! API module
//!
//! HTTP API endpoints.

pub mod routes;

use std::sync::Arc;

use crate::service::AccountService;

pub use routes::create_router;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountService>,
}

impl AppState {
    pub fn new(service: Arc<AccountService>) -> Self {
        Self { service }
    }
}
