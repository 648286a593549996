//! User-facing notices published by the route editor.
//!
//! [`NoticeBus`] is an in-process fan-out hub backed by
//! `tokio::sync::broadcast`. The editor publishes a [`Notice`] for every
//! outcome the user should see; the embedding view layer subscribes and
//! renders them as toasts.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use meridian_core::types::Timestamp;

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A single user-facing notification.
///
/// Constructed via [`Notice::success`] or [`Notice::error`] and optionally
/// enriched with [`with_title`](Notice::with_title).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,

    /// Optional short heading, e.g. `"Update failed"`.
    pub title: Option<String>,

    /// Body text shown to the user.
    pub message: String,

    /// When the notice was published (UTC).
    pub at: Timestamp,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: None,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: None,
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// Attach a heading to the notice.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

// ---------------------------------------------------------------------------
// NoticeBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// In-process fan-out hub for [`Notice`]s.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published notice.
///
/// # Usage
///
/// ```rust
/// use meridian_editor::notice::{Notice, NoticeBus};
///
/// let bus = NoticeBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(Notice::success("Designated routes updated"));
/// ```
pub struct NoticeBus {
    sender: broadcast::Sender<Notice>,
}

impl NoticeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed notices are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a notice to all current subscribers.
    ///
    /// If there are no active subscribers the notice is silently dropped.
    pub fn publish(&self, notice: Notice) {
        // Ignore the SendError; it only means there are zero receivers.
        let _ = self.sender.send(notice);
    }

    /// Subscribe to all notices published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }
}

impl Default for NoticeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
