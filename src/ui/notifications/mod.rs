// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are timed, auto-dismissing popups stacked in a corner of the window.
//! Each one fades in, waits, fades out and is then dropped from the queue.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and `Kind` enum
//! - [`phase`] - Time-driven phase and opacity
//! - [`appearance`] - Static kind-to-appearance table
//! - [`manager`] - `Manager` queue with the per-frame render pass
//! - [`toast`] - iced widgets for the recorded frames
//! - [`icon_font`] - One-time icon font registration
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::toast;
//! use iced_notify::ui::notifications::{Kind, Manager, Snapshot, Toast};
//!
//! let mut manager = Manager::new();
//! manager.insert(toast!(Kind::Success, "Saved {}", path.display()));
//!
//! // Once per frame, in `update`:
//! let mut snapshot = Snapshot::new();
//! manager.render_pass(now, &mut snapshot);
//!
//! // In `view`:
//! let overlay = Toast::view_overlay(snapshot.frames(), anchor, &icons);
//! ```

pub mod appearance;
pub mod icon_font;
pub mod manager;
pub mod notification;
pub mod phase;
pub mod text;
pub mod toast;

pub use appearance::{Appearance, Icon};
pub use icon_font::{Glyph, IconSet, ICON_FONT, ICON_FONT_FAMILY};
pub use manager::{Manager, Placement, Surface};
pub use notification::{Kind, Notification, NotificationId};
pub use phase::{lifetime, Lifecycle, Phase};
pub use text::BoundedText;
pub use toast::{Anchor, Snapshot, Toast, ToastFrame};
