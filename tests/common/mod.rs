//! Common test utilities

use std::sync::Arc;

use axum::Router;

use payflow::api::{self, AppState};
use payflow::notification::EmailNotificationSink;
use payflow::service::AccountService;
use payflow::store::InMemoryAccountStore;

/// Build an app with a fresh in-memory ledger and a fresh lock registry.
/// Every test gets its own state; nothing leaks between tests.
pub fn test_app() -> Router {
    let store = Arc::new(InMemoryAccountStore::new());
    let sink = Arc::new(EmailNotificationSink::new());
    let service = Arc::new(AccountService::new(store, sink));

    api::create_router().with_state(AppState::new(service))
}
