// SPDX-License-Identifier: MPL-2.0
//! Bounded text storage for toast titles and bodies.
//!
//! Text is written through [`fmt::Arguments`], so formatting is checked at
//! compile time. Anything past [`MAX_TEXT_LEN`] bytes is dropped without error.

use crate::config::MAX_TEXT_LEN;
use std::fmt::{self, Write as _};

/// Text with a fixed byte capacity that truncates instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedText {
    buf: String,
    truncated: bool,
}

impl BoundedText {
    /// Creates empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats `args` into fresh bounded text.
    #[must_use]
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        let mut text = Self::new();
        text.set(args);
        text
    }

    /// Replaces the content with `args`, truncating at [`MAX_TEXT_LEN`] bytes.
    pub fn set(&mut self, args: fmt::Arguments<'_>) {
        self.buf.clear();
        self.truncated = false;
        // `write_str` never fails, truncation is recorded instead.
        let _ = self.write_fmt(args);
        if self.truncated {
            tracing::trace!(limit = MAX_TEXT_LEN, "toast text truncated");
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns whether the last write dropped text past the capacity.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for BoundedText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let room = MAX_TEXT_LEN - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut cut = room;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf.push_str(&s[..cut]);
        self.truncated = true;
        Ok(())
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<&str> for BoundedText {
    fn from(s: &str) -> Self {
        Self::from_args(format_args!("{s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_stored_verbatim() {
        let text = BoundedText::from_args(format_args!("saved {} files", 3));
        assert_eq!(text.as_str(), "saved 3 files");
        assert!(!text.is_truncated());
    }

    #[test]
    fn long_text_is_truncated_to_capacity() {
        let long = "x".repeat(MAX_TEXT_LEN + 100);
        let text = BoundedText::from(long.as_str());
        assert_eq!(text.as_str().len(), MAX_TEXT_LEN);
        assert!(text.is_truncated());
    }

    #[test]
    fn exact_capacity_is_not_truncated() {
        let exact = "y".repeat(MAX_TEXT_LEN);
        let text = BoundedText::from(exact.as_str());
        assert_eq!(text.as_str().len(), MAX_TEXT_LEN);
        assert!(!text.is_truncated());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // One byte short of room for the final crab.
        let prefix = "a".repeat(MAX_TEXT_LEN - 3);
        let text = BoundedText::from_args(format_args!("{prefix}🦀"));
        assert_eq!(text.as_str(), prefix);
        assert!(text.is_truncated());
    }

    #[test]
    fn truncation_spans_multiple_format_pieces() {
        let half = "b".repeat(MAX_TEXT_LEN / 2 + 1);
        let text = BoundedText::from_args(format_args!("{half}{half}{}", "tail"));
        assert_eq!(text.as_str().len(), MAX_TEXT_LEN);
        assert!(!text.as_str().contains("tail"));
    }

    #[test]
    fn set_replaces_previous_content() {
        let mut text = BoundedText::from("first");
        text.set(format_args!("second"));
        assert_eq!(text.as_str(), "second");
    }

    #[test]
    fn default_is_empty() {
        assert!(BoundedText::new().is_empty());
    }
}
