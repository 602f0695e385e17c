use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::Notification;

/// Default lifetime of a notification before it clears itself.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(2500);

/// Holds at most one current notification and clears it after a fixed TTL.
/// A newer notification supersedes the pending clear of the previous one:
/// each notification gets a sequence number, and the deferred clear only
/// fires if its number is still the current one.
#[derive(Clone)]
pub struct Notifier {
    current: Arc<Mutex<Option<(u64, Notification)>>>,
    seq: Arc<AtomicU64>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            seq: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Publish a notification, replacing any current one, and schedule its
    /// expiry. Fire-and-forget: the caller never waits on the clear.
    pub fn notify(&self, notification: Notification) {
        let id = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.current.lock().unwrap() = Some((id, notification));

        let current = Arc::clone(&self.current);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut guard = current.lock().unwrap();
            if matches!(*guard, Some((active_id, _)) if active_id == id) {
                *guard = None;
            }
        });
    }

    /// The current notification, if it has not expired yet.
    pub fn current(&self) -> Option<Notification> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map(|(_, notification)| notification.clone())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}
