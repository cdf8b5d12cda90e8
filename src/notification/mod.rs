//! Notification Sink
//!
//! Fire-and-forget delivery of transfer notifications to account holders.
//! The transfer engine never consumes a return value from the sink: a
//! committed transfer is successful once both balance writes land, whether
//! or not the notification made it out.

use crate::domain::Account;

/// Outbound notification channel for account holders.
pub trait NotificationSink: Send + Sync {
    /// Deliver a human-readable transfer description to the account holder.
    fn notify(&self, account: &Account, description: &str);
}

/// Notification sink that records deliveries in the service log.
///
/// Stands in for a real delivery channel (email, push, webhook); swapping
/// one in is a matter of implementing [`NotificationSink`] behind the same
/// seam.
#[derive(Debug, Default)]
pub struct EmailNotificationSink;

impl EmailNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for EmailNotificationSink {
    fn notify(&self, account: &Account, description: &str) {
        tracing::info!(
            account_id = account.id(),
            description,
            "sending notification to account holder"
        );
    }
}
