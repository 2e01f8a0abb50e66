// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and the `Kind` enum
//! used throughout the notification system.

use super::phase::Lifecycle;
use super::text::BoundedText;
use crate::config::DEFAULT_DISMISS;
use crate::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Only used to key the rendered widget; ordering follows queue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity kind, selects the default title, icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Kind {
    /// Plain toast without title, icon or accent.
    #[default]
    None = 0,
    Success = 1,
    Warning = 2,
    Error = 3,
    Info = 4,
}

impl Kind {
    pub const COUNT: usize = 5;

    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::None,
        Kind::Success,
        Kind::Warning,
        Kind::Error,
        Kind::Info,
    ];
}

impl TryFrom<u8> for Kind {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Error> {
        Kind::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(Error::InvalidKind(raw))
    }
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    kind: Kind,
    title: BoundedText,
    body: BoundedText,
    /// How long the toast stays fully visible between its fades.
    dismiss_after: Duration,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a notification of the given kind, timestamped now.
    pub fn new(kind: Kind) -> Self {
        Self::created_at(kind, Instant::now())
    }

    /// Creates a notification with an explicit creation instant.
    ///
    /// Useful for hosts that drive their own frame clock.
    pub fn created_at(kind: Kind, created_at: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: BoundedText::new(),
            body: BoundedText::new(),
            dismiss_after: DEFAULT_DISMISS,
            created_at,
        }
    }

    /// Creates a success notification.
    pub fn success(body: impl fmt::Display) -> Self {
        Self::new(Kind::Success).with_body(body)
    }

    /// Creates an info notification.
    pub fn info(body: impl fmt::Display) -> Self {
        Self::new(Kind::Info).with_body(body)
    }

    /// Creates a warning notification.
    pub fn warning(body: impl fmt::Display) -> Self {
        Self::new(Kind::Warning).with_body(body)
    }

    /// Creates an error notification.
    pub fn error(body: impl fmt::Display) -> Self {
        Self::new(Kind::Error).with_body(body)
    }

    /// Sets how long the toast stays fully visible before fading out.
    #[must_use]
    pub fn dismiss_after(mut self, duration: Duration) -> Self {
        self.dismiss_after = duration;
        self
    }

    /// Sets an explicit title, overriding the kind's default.
    #[must_use]
    pub fn with_title(mut self, title: impl fmt::Display) -> Self {
        self.title.set(format_args!("{title}"));
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl fmt::Display) -> Self {
        self.body.set(format_args!("{body}"));
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the explicit title, empty when none was given.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// Whether the body was cut at [`MAX_TEXT_LEN`](crate::config::MAX_TEXT_LEN).
    #[must_use]
    pub fn body_truncated(&self) -> bool {
        self.body.is_truncated()
    }

    /// Returns the explicit title, or the kind's default title if it is empty.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        if self.title.is_empty() {
            self.kind.appearance().title
        } else {
            Some(self.title.as_str())
        }
    }

    #[must_use]
    pub fn dismiss_duration(&self) -> Duration {
        self.dismiss_after
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification at `now`, zero if `now` is earlier.
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Evaluates phase and opacity at `now`.
    #[must_use]
    pub fn lifecycle(&self, now: Instant) -> Lifecycle {
        Lifecycle::at(self.age_at(now), self.dismiss_after)
    }
}

/// Builds a [`Notification`] from a kind, an optional dismiss duration and a
/// format string for the body.
///
/// ```
/// use iced_notify::toast;
/// use iced_notify::ui::notifications::Kind;
/// use std::time::Duration;
///
/// let plain = toast!(Kind::Info);
/// assert!(plain.body().is_empty());
///
/// let saved = toast!(Kind::Success, "Saved {} images", 3);
/// assert_eq!(saved.body(), "Saved 3 images");
///
/// let slow = toast!(Kind::Warning, dismiss = Duration::from_secs(8), "Disk {}% full", 91);
/// assert_eq!(slow.dismiss_duration(), Duration::from_secs(8));
/// ```
#[macro_export]
macro_rules! toast {
    ($kind:expr, dismiss = $dismiss:expr, $($arg:tt)+) => {
        $crate::ui::notifications::Notification::new($kind)
            .dismiss_after($dismiss)
            .with_body(::std::format_args!($($arg)+))
    };
    ($kind:expr, dismiss = $dismiss:expr) => {
        $crate::ui::notifications::Notification::new($kind).dismiss_after($dismiss)
    };
    ($kind:expr, $($arg:tt)+) => {
        $crate::ui::notifications::Notification::new($kind)
            .with_body(::std::format_args!($($arg)+))
    };
    ($kind:expr) => {
        $crate::ui::notifications::Notification::new($kind)
    };
}
