//! Transient user notifications
//!
//! Screens never print or render feedback directly; they report through an
//! injected [`Notifier`]. The CLI writes notifications to stderr, the
//! dashboard keeps them in a [`ToastQueue`] that expires them after a fixed
//! lifetime.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use owo_colors::OwoColorize;
use parking_lot::Mutex;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn warning(&self, message: &str) {
        self.notify(NotificationKind::Warning, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message);
    }
}

/// A notification message with its creation time
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.timestamp.elapsed() >= ttl
    }
}

/// Shared queue of recent notifications.
///
/// Cloning yields another handle to the same queue.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
}

/// Older toasts beyond this count are dropped even before they expire
const MAX_QUEUED: usize = 16;

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
        }
    }

    pub fn push(&self, toast: Toast) {
        let mut toasts = self.toasts.lock();
        toasts.push_back(toast);
        while toasts.len() > MAX_QUEUED {
            toasts.pop_front();
        }
    }

    /// Drop expired toasts and return the newest live one
    pub fn current(&self) -> Option<Toast> {
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| !t.is_expired(self.ttl));
        toasts.back().cloned()
    }

    /// Messages still live, oldest first
    pub fn messages(&self) -> Vec<(NotificationKind, String)> {
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| !t.is_expired(self.ttl));
        toasts.iter().map(|t| (t.kind, t.message.clone())).collect()
    }

    pub fn clear(&self) {
        self.toasts.lock().clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.push(Toast::new(message, kind));
    }
}

/// Writes notifications to stderr so they never mix with command output.
///
/// Error notifications are only logged: the CLI reports failures once, from
/// the error the command returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    /// Suppress success/info lines (used with `--json`)
    pub quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Info | NotificationKind::Success if self.quiet => {}
            NotificationKind::Info => eprintln!("{}", message.cyan()),
            NotificationKind::Success => eprintln!("{}", message.green()),
            NotificationKind::Warning => {
                tracing::warn!("{message}");
                eprintln!("{} {}", "Warning:".yellow().bold(), message);
            }
            // The failing command returns the error and `main` prints it
            NotificationKind::Error => tracing::debug!("error notification: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_returns_newest() {
        let queue = ToastQueue::new(Duration::from_secs(5));
        queue.success("Post created");
        queue.error("Delete failed");

        let current = queue.current().unwrap();
        assert_eq!(current.message, "Delete failed");
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(queue.messages().len(), 2);
    }

    #[test]
    fn test_queue_expires_toasts() {
        let queue = ToastQueue::new(Duration::ZERO);
        queue.success("gone immediately");
        assert!(queue.current().is_none());
        assert!(queue.messages().is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = ToastQueue::new(Duration::from_secs(5));
        let handle: Arc<dyn Notifier> = Arc::new(queue.clone());
        handle.warning("busy");
        assert_eq!(
            queue.messages(),
            vec![(NotificationKind::Warning, "busy".to_string())]
        );
    }

    #[test]
    fn test_queue_is_bounded() {
        let queue = ToastQueue::new(Duration::from_secs(60));
        for i in 0..(MAX_QUEUED + 5) {
            queue.success(&format!("toast {i}"));
        }
        let messages = queue.messages();
        assert_eq!(messages.len(), MAX_QUEUED);
        assert_eq!(messages[0].1, "toast 5");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("x", NotificationKind::Info);
        assert!(!toast.is_expired(Duration::from_secs(60)));
        assert!(toast.is_expired(Duration::ZERO));
    }
}
