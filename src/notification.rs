//! User-visible notices, delivered as freedesktop notifications by default.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use zbus::{Connection, proxy};

/// Upper bound on how long [`DesktopNotifier::flush`] waits.
pub const FLUSH_TIMEOUT: Duration = Duration::from_secs(3);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A modal alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Abstraction over how notices reach the user. Hosts map it onto their
/// alert dialog; tests record notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// D-Bus interface for freedesktop Notifications.
#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    /// Send a notification and return its id.
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Send a system notification.
///
/// # Arguments
/// * `summary` - Notification title
/// * `body` - Notification body text
/// * `icon` - Icon name
pub async fn send_notification(summary: &str, body: &str, icon: &str) -> Result<(), String> {
    let connection = Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session bus: {}", e))?;

    let proxy = NotificationsProxy::new(&connection)
        .await
        .map_err(|e| format!("Failed to create notifications proxy: {}", e))?;

    proxy
        .notify(
            "StorySnap",
            0,
            icon,
            summary,
            body,
            vec![],
            HashMap::new(),
            5000,
        )
        .await
        .map_err(|e| format!("Failed to send notification: {}", e))?;

    Ok(())
}

/// Notifier posting to the desktop notification daemon.
///
/// Notices are sent in the background on the current tokio runtime; outside a
/// runtime they are only logged. Call [`DesktopNotifier::flush`] before the
/// runtime shuts down so pending sends are not cancelled.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sends not yet awaited by [`flush`](Self::flush).
    pub fn pending(&self) -> usize {
        self.lock_pending().len()
    }

    /// Waits (bounded by [`FLUSH_TIMEOUT`]) for every notice sent so far.
    pub async fn flush(&self) {
        let handles = std::mem::take(&mut *self.lock_pending());
        if handles.is_empty() {
            return;
        }
        log::debug!("Waiting for {} notification(s)", handles.len());
        let wait_all = async {
            for handle in handles {
                if let Err(e) = handle.await {
                    log::warn!("Notification task failed: {}", e);
                }
            }
        };
        if tokio::time::timeout(FLUSH_TIMEOUT, wait_all).await.is_err() {
            log::warn!("Timed out waiting for notifications");
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Info => log::info!("{}: {}", notice.title, notice.body),
            NoticeKind::Error => log::error!("{}: {}", notice.title, notice.body),
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::debug!("No runtime available, notice not forwarded to desktop");
            return;
        };

        let summary = notice.title.clone();
        let body = notice.body.clone();
        let icon = match notice.kind {
            NoticeKind::Info => "camera-photo",
            NoticeKind::Error => "dialog-error",
        };
        let task = handle.spawn(async move {
            if let Err(e) = send_notification(&summary, &body, icon).await {
                log::warn!("Failed to send notification: {}", e);
            }
        });
        let mut pending = self.lock_pending();
        pending.retain(|task| !task.is_finished());
        pending.push(task);
    }
}
