//! One-shot contact synchronization with user-facing notifications.

use std::sync::Mutex;

use tokio::sync::mpsc::UnboundedSender;

use crate::backend::{ContactSyncer, SYNC_SUCCESS};
use crate::dto::notification::Notification;
use crate::services::errors::{ViewError, ViewResult};

pub const SYNC_SUCCESS_MESSAGE: &str = "Contacts synchronized successfully!";

/// Receives notifications emitted by the view.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl Notifier for UnboundedSender<Notification> {
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.send(notification) {
            log::warn!("Dropping notification, receiver closed: {:?}", err.0.title);
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the collected notifications.
    pub fn take(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

/// Runs the contact synchronization once and notifies about the outcome.
///
/// Only the exact `"Success"` payload counts as success; any other payload is
/// returned as [`ViewError::SyncRejected`].
pub async fn sync_contacts<S, N>(syncer: &S, notifier: &N) -> ViewResult<()>
where
    S: ContactSyncer + ?Sized,
    N: Notifier + ?Sized,
{
    let result = match syncer.sync_contacts().await {
        Ok(payload) if payload == SYNC_SUCCESS => Ok(()),
        Ok(payload) => Err(ViewError::SyncRejected(payload)),
        Err(err) => Err(ViewError::Sync(err)),
    };

    match &result {
        Ok(()) => {
            log::info!("Contacts synchronized");
            notifier.notify(Notification::success(SYNC_SUCCESS_MESSAGE));
        }
        Err(err) => {
            log::error!("Failed to synchronize contacts: {err}");
            notifier.notify(Notification::error(format!(
                "Failed to synchronize contacts: {}",
                err.user_message()
            )));
        }
    }

    result
}
