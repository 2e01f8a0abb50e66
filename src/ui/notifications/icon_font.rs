// SPDX-License-Identifier: MPL-2.0
//! One-time registration of the icon font used for toast glyphs.
//!
//! Until a font is registered (or if loading it fails), icons are drawn with
//! their Unicode fallback in the default font.

use super::appearance::Icon;
use crate::config::DEFAULT_ICON_SIZE;
use crate::error::{Error, Result};
use iced::font::{self, Weight};
use iced::{Font, Task};
use std::borrow::Cow;

/// Family of the icon font; the file handed to [`IconSet::register`] must declare it.
pub const ICON_FONT_FAMILY: &str = "Font Awesome 6 Free";

/// The solid style of the icon font.
pub const ICON_FONT: Font = Font {
    weight: Weight::Black,
    ..Font::with_name(ICON_FONT_FAMILY)
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Unregistered,
    Loading { size: f32 },
    Ready { size: f32 },
    Failed,
}

/// A glyph ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub font: Font,
    pub size: f32,
}

/// Tracks the icon font registration for one application.
#[derive(Debug, Clone)]
pub struct IconSet {
    state: State,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            state: State::Unregistered,
        }
    }
}

impl IconSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading the icon font and returns the task that completes it.
    ///
    /// Borrowed `'static` data stays with the caller; owned bytes are moved into
    /// the font system. Feed the task's output back through [`IconSet::on_loaded`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IconFontAlreadyRegistered`] on a second call and
    /// [`Error::IconFont`] for empty data or a non-positive pixel size.
    pub fn register(
        &mut self,
        data: impl Into<Cow<'static, [u8]>>,
        pixel_size: f32,
    ) -> Result<Task<std::result::Result<(), font::Error>>> {
        if self.state != State::Unregistered {
            return Err(Error::IconFontAlreadyRegistered);
        }
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(Error::IconFont(format!("invalid pixel size {pixel_size}")));
        }

        let data = data.into();
        if data.is_empty() {
            return Err(Error::IconFont("font data is empty".into()));
        }

        tracing::debug!(
            bytes = data.len(),
            owned = matches!(data, Cow::Owned(_)),
            pixel_size,
            "loading icon font"
        );
        self.state = State::Loading { size: pixel_size };
        Ok(font::load(data))
    }

    /// Records the outcome of the load started by [`IconSet::register`].
    pub fn on_loaded(&mut self, result: std::result::Result<(), font::Error>) {
        let State::Loading { size } = self.state else {
            tracing::warn!(state = ?self.state, "icon font load result without pending load");
            return;
        };

        self.state = match result {
            Ok(()) => State::Ready { size },
            Err(err) => {
                tracing::warn!(?err, "icon font failed to load, using fallback glyphs");
                State::Failed
            }
        };
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    /// Resolves the glyph and font to draw `icon` with.
    #[must_use]
    pub fn glyph(&self, icon: Icon) -> Glyph {
        match self.state {
            State::Ready { size } => Glyph {
                ch: icon.codepoint,
                font: ICON_FONT,
                size,
            },
            State::Loading { size } => Glyph {
                ch: icon.fallback,
                font: Font::DEFAULT,
                size,
            },
            State::Unregistered | State::Failed => Glyph {
                ch: icon.fallback,
                font: Font::DEFAULT,
                size: DEFAULT_ICON_SIZE,
            },
        }
    }
}
