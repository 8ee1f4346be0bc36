//! # Notification Seam
//!
//! Toast-equivalent notifications emitted by the action layer. The store
//! does not know what a toast looks like; it hands a [`Notice`] to
//! whatever [`Notifier`] the composition root plugged in.
//!
//! ## Notice Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Store action                Notifier impl          UI              │
//! │  ────────────                ─────────────          ──              │
//! │                                                                     │
//! │  add_to_cart (dup) ────────► warning ─────────────► amber toast     │
//! │  add_to_cart (new) ────────► success ─────────────► green toast     │
//! │  add_product ok ───────────► success ─────────────► green toast     │
//! │  add_product failed ───────► error ───────────────► red toast       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notifications.
///
/// Implementations must be cheap: the store emits notices while holding
/// no locks, but from async action context.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default notifier: routes notices through `tracing`.
///
/// Useful for headless use and tests; UI hosts replace it with their own
/// toast bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => info!(message = %notice.message, "notice"),
            NoticeLevel::Warning => warn!(message = %notice.message, "notice"),
            NoticeLevel::Error => error!(message = %notice.message, "notice"),
        }
    }
}

impl<T: Notifier> Notifier for Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Collecting notifier: buffers notices in memory.
///
/// Used by headless hosts that drain notices on their own schedule, and
/// by tests asserting on emitted notices.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        MemoryNotifier::default()
    }

    /// Drains and returns all buffered notices.
    pub fn take(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().expect("notice buffer mutex poisoned");
        std::mem::take(&mut *notices)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        let mut notices = self.notices.lock().expect("notice buffer mutex poisoned");
        notices.push(notice);
    }
}
