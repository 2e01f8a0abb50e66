// SPDX-License-Identifier: MPL-2.0
//! Static appearance table keyed by notification kind.

use super::notification::Kind;
use crate::ui::design_tokens::palette;
use iced::Color;

/// An icon glyph with a plain Unicode stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Codepoint in the icon font's private-use range.
    pub codepoint: char,
    /// Glyph drawn with the default font when no icon font is loaded.
    pub fallback: char,
}

impl Icon {
    pub const CHECK_CIRCLE: Icon = Icon {
        codepoint: '\u{f058}',
        fallback: '\u{2714}',
    };
    pub const EXCLAMATION_TRIANGLE: Icon = Icon {
        codepoint: '\u{f071}',
        fallback: '\u{26a0}',
    };
    pub const TIMES_CIRCLE: Icon = Icon {
        codepoint: '\u{f057}',
        fallback: '\u{2716}',
    };
    pub const INFO_CIRCLE: Icon = Icon {
        codepoint: '\u{f05a}',
        fallback: '\u{2139}',
    };
}

/// Default title, icon and accent color of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub kind: Kind,
    pub title: Option<&'static str>,
    pub icon: Option<Icon>,
    pub color: Color,
}

const APPEARANCES: [Appearance; Kind::COUNT] = [
    Appearance {
        kind: Kind::None,
        title: None,
        icon: None,
        color: palette::WHITE,
    },
    Appearance {
        kind: Kind::Success,
        title: Some("Success"),
        icon: Some(Icon::CHECK_CIRCLE),
        color: palette::GREEN,
    },
    Appearance {
        kind: Kind::Warning,
        title: Some("Warning"),
        icon: Some(Icon::EXCLAMATION_TRIANGLE),
        color: palette::YELLOW,
    },
    Appearance {
        kind: Kind::Error,
        title: Some("Error"),
        icon: Some(Icon::TIMES_CIRCLE),
        color: palette::RED,
    },
    Appearance {
        kind: Kind::Info,
        title: Some("Info"),
        icon: Some(Icon::INFO_CIRCLE),
        color: palette::BLUE,
    },
];

// Rows must follow discriminant order for the index lookup below.
const _: () = {
    let mut i = 0;
    while i < Kind::COUNT {
        assert!(APPEARANCES[i].kind as usize == i);
        i += 1;
    }
};

impl Kind {
    /// Looks up the appearance row for this kind.
    #[must_use]
    pub fn appearance(self) -> Appearance {
        APPEARANCES[self as usize]
    }
}
