//! User-facing notification channel
//!
//! Components hold a cloneable `Notifier` and push transient payloads to
//! whatever rendering layer attached the receiver. Notifications are
//! advisory: a disabled notifier, or one whose receiver is gone, drops
//! payloads silently.

use shared::message::{NotificationCategory, NotificationPayload};
use tokio::sync::mpsc;

/// Sending half of the notification channel
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Option<mpsc::UnboundedSender<NotificationPayload>>,
}

impl Notifier {
    /// Notifier with an attached receiver
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<NotificationPayload>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Notifier that drops every payload
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Send a prepared payload
    pub fn send(&self, payload: NotificationPayload) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(payload);
        }
    }

    pub fn info(
        &self,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.send(NotificationPayload::info(title, message).with_category(category));
    }

    pub fn warning(
        &self,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.send(NotificationPayload::warning(title, message).with_category(category));
    }

    pub fn error(
        &self,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.send(NotificationPayload::error(title, message).with_category(category));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::disabled()
    }
}
