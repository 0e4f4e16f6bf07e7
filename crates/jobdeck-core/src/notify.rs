//! Transient user notifications.
//!
//! Banners stack without deduplication and dismiss themselves after a fixed
//! delay, or earlier if dismissed manually. Raising one never fails and
//! returns nothing; it is a pure side-effecting UI primitive.

use std::time::{Duration, Instant};

/// How long a banner stays up before it dismisses itself.
pub const DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
}

/// Sink for outcome notifications raised by job-list operations.
pub trait Notifier {
    /// Raises a banner with the given severity.
    fn notify(&mut self, severity: Severity, message: &str);
}

/// A banner currently on screen.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Visual severity.
    pub severity: Severity,
    /// Banner text.
    pub message: String,
    posted_at: Instant,
}

/// Stacking banner store with fixed-delay self-dismissal.
#[derive(Debug)]
pub struct NotificationCenter {
    notices: Vec<Notice>,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    /// Creates a center with the standard [`DISMISS_AFTER`] delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DISMISS_AFTER)
    }

    /// Creates a center with a custom dismissal delay.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            notices: Vec::new(),
            ttl,
        }
    }

    /// Drops banners whose dismissal delay has elapsed.
    pub fn sweep(&mut self) {
        let ttl = self.ttl;
        self.notices.retain(|notice| notice.posted_at.elapsed() < ttl);
    }

    /// Banners currently on screen, oldest first.
    ///
    /// Call [`Self::sweep`] first to drop expired banners.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Manually dismisses the banner at `index`; out of range is a no-op.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    /// Number of banners on screen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether no banner is on screen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.notices.push(Notice {
            severity,
            message: message.to_owned(),
            posted_at: Instant::now(),
        });
    }
}
