// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual tokens shared by the toast overlay and the demo host.

## Organization

- **Palette**: Base colors and per-kind accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale

## Examples

```
use iced_notify::ui::design_tokens::{palette, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::TOAST_BACKGROUND,
    ..palette::TOAST_BG
};
assert!(backdrop.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Toast window background (before opacity is applied).
    pub const TOAST_BG: Color = Color::from_rgb(0.169, 0.169, 0.169);

    // Kind accents
    pub const GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::from_rgb(1.0, 1.0, 0.0);
    pub const RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::from_rgb(0.0, 0.616, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Resting alpha of the toast background at full toast opacity.
    pub const TOAST_BACKGROUND: f32 = 0.392;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Lower bound on wrap width so toasts stay legible in tiny windows.
    pub const TOAST_MIN_WIDTH: f32 = 160.0;
    pub const SEPARATOR: f32 = 1.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Title row text.
    pub const TITLE: f32 = 14.0;

    /// Body text.
    pub const BODY: f32 = 13.0;

    /// Line height multiplier used when estimating toast heights.
    pub const LINE_HEIGHT: f32 = 1.3;

    /// Average glyph advance as a fraction of the font size, for wrap estimates.
    pub const GLYPH_WIDTH_RATIO: f32 = 0.55;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border around each toast.
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(opacity::TOAST_BACKGROUND > 0.0 && opacity::TOAST_BACKGROUND < 1.0);
    assert!(typography::GLYPH_WIDTH_RATIO > 0.0);
    assert!(typography::TITLE >= typography::BODY);
};
