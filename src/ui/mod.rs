// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - Toast notification queue and overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
