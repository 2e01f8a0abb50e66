// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::ui::notifications::{Anchor, Kind};
use iced::{font, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Insert a sample toast of the given kind.
    Push(Kind),
    /// Frame tick; runs the toast render pass.
    Tick(Instant),
    /// The window was resized; toast wrap estimates follow its width.
    WindowResized(Size),
    /// Result of loading the icon font.
    IconFontLoaded(Result<(), font::Error>),
}

/// Runtime flags passed from the launcher into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Read settings from this file instead of the user config directory.
    pub config_path: Option<PathBuf>,
    /// Overrides the anchor from the settings file.
    pub anchor: Option<Anchor>,
}
