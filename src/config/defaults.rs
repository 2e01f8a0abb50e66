// SPDX-License-Identifier: MPL-2.0
//! Centralized compile-time constants for the toast overlay.
//!
//! These values are fixed at build time and are not read from `settings.toml`.
//! Constants are organized by category.
//!
//! # Categories
//!
//! - **Text**: Storage bound for titles and bodies
//! - **Timing**: Fade and auto-dismiss durations
//! - **Layout**: Padding from the window edge and between toasts
//! - **Appearance**: Opacity ceiling, rounding, icon size

use std::time::Duration;

// ==========================================================================
// Text Defaults
// ==========================================================================

/// Maximum number of bytes stored for a toast title or body.
pub const MAX_TEXT_LEN: usize = 4096;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Fade-in and fade-out duration (symmetric).
pub const FADE: Duration = Duration::from_millis(1000);

/// Wait duration between the two fades when the caller gives none.
pub const DEFAULT_DISMISS: Duration = Duration::from_millis(3000);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Horizontal distance between a toast and the window edge.
pub const PADDING_X: f32 = 5.0;

/// Vertical distance between the first toast and the window edge.
pub const PADDING_Y: f32 = 21.0;

/// Vertical gap between two stacked toasts.
pub const PADDING_MESSAGE_Y: f32 = 5.0;

/// Extra space between the title row and the body.
pub const TITLE_BODY_GAP: f32 = 5.0;

/// Toast text wraps at this fraction of the window width.
pub const WRAP_FRACTION: f32 = 0.25;

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Global opacity ceiling applied to every toast (0-1).
pub const OPACITY_CEILING: f32 = 1.0;

/// Corner radius of a toast window.
pub const TOAST_ROUNDING: f32 = 5.0;

/// Icon glyph size used when the host does not configure one.
pub const DEFAULT_ICON_SIZE: f32 = 16.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_TEXT_LEN >= 4);
    assert!(FADE.as_millis() > 0);
    assert!(OPACITY_CEILING > 0.0);
    assert!(OPACITY_CEILING <= 1.0);
    assert!(WRAP_FRACTION > 0.0);
    assert!(WRAP_FRACTION <= 1.0);
    assert!(PADDING_MESSAGE_Y >= 0.0);
    assert!(DEFAULT_ICON_SIZE > 0.0);
};
