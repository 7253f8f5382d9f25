// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

This module defines the visual constants shared by the snack bar and the demo
application.

## Organization

- **Palette**: Named color tokens, grouped in semantic families
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use snack_bar::ui::design_tokens::{palette, spacing};

// Look a token up by its asset name
let surface = palette::by_name("bg-surface").unwrap();
assert_eq!(surface, palette::background::SURFACE);

// Hex values are accepted wherever a token name is
let red = palette::parse("#FF0000").unwrap();
assert_eq!(red.r, 1.0);

let padding = spacing::MD; // 16px
```
"##]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub mod background {
        use super::Color;

        pub const APP_BAR: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
        pub const BACKGROUND: Color = Color::from_rgb8(0xF5, 0xF6, 0xF8);
        pub const SURFACE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
        /// Dark surface used behind snack bar content.
        pub const SNACKBAR: Color = Color::from_rgb8(0x32, 0x32, 0x32);
    }

    pub mod divider {
        use super::Color;

        pub const BORDER: Color = Color::from_rgb8(0xE0, 0xE3, 0xE8);
    }

    pub mod button {
        use super::Color;

        pub const DISABLE: Color = Color::from_rgb8(0xC9, 0xCD, 0xD4);
    }

    pub mod icon {
        use super::Color;

        pub const DEFAULT: Color = Color::from_rgb8(0x4A, 0x4F, 0x57);
    }

    pub mod status {
        use super::Color;

        pub const CAUTION_100: Color = Color::from_rgb8(0xFF, 0xF4, 0xE0);
        pub const CAUTION_500: Color = Color::from_rgb8(0xF2, 0xA2, 0x1B);
        pub const CAUTION_700: Color = Color::from_rgb8(0xB3, 0x6F, 0x00);

        pub const INFO_100: Color = Color::from_rgb8(0xE3, 0xF0, 0xFF);
        pub const INFO_500: Color = Color::from_rgb8(0x2F, 0x80, 0xED);
        pub const INFO_700: Color = Color::from_rgb8(0x1B, 0x5B, 0xB5);

        pub const SUCCESS_100: Color = Color::from_rgb8(0xE3, 0xF7, 0xEA);
        pub const SUCCESS_500: Color = Color::from_rgb8(0x27, 0xAE, 0x60);
        pub const SUCCESS_700: Color = Color::from_rgb8(0x1B, 0x7A, 0x43);

        pub const WARN_100: Color = Color::from_rgb8(0xFD, 0xE7, 0xE7);
        pub const WARN_500: Color = Color::from_rgb8(0xEB, 0x57, 0x57);
        pub const WARN_700: Color = Color::from_rgb8(0xB3, 0x26, 0x1E);

        pub const UNKNOWN_100: Color = Color::from_rgb8(0xEE, 0xF0, 0xF3);
        pub const UNKNOWN_500: Color = Color::from_rgb8(0x8A, 0x91, 0x9C);
        pub const UNKNOWN_700: Color = Color::from_rgb8(0x59, 0x60, 0x6B);
    }

    pub mod text {
        use super::Color;

        pub const CAUTION: Color = Color::from_rgb8(0xB3, 0x6F, 0x00);
        pub const DEFAULT: Color = Color::from_rgb8(0x1F, 0x23, 0x29);
        pub const HINT: Color = Color::from_rgb8(0x8A, 0x91, 0x9C);
        pub const ACCENT: Color = Color::from_rgb8(0x6C, 0xB4, 0xFF);
        pub const INFO: Color = Color::from_rgb8(0x1B, 0x5B, 0xB5);
        pub const PLACEHOLDER: Color = Color::from_rgb8(0xB0, 0xB6, 0xBF);
        pub const SECONDARY: Color = Color::from_rgb8(0x59, 0x60, 0x6B);
        pub const SUCCESS: Color = Color::from_rgb8(0x1B, 0x7A, 0x43);
        pub const UNKNOWN: Color = Color::from_rgb8(0x59, 0x60, 0x6B);
        pub const WARN: Color = Color::from_rgb8(0xB3, 0x26, 0x1E);
        /// Text drawn on dark surfaces.
        pub const INVERSE: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    }

    /// Every token paired with its asset name.
    const TOKENS: &[(&str, Color)] = &[
        ("bg-app-bar", background::APP_BAR),
        ("bg-background", background::BACKGROUND),
        ("bg-surface", background::SURFACE),
        ("bg-snackbar", background::SNACKBAR),
        ("border-divider", divider::BORDER),
        ("bg-disable-button", button::DISABLE),
        ("icon-color", icon::DEFAULT),
        ("caution-100", status::CAUTION_100),
        ("caution-500", status::CAUTION_500),
        ("caution-700", status::CAUTION_700),
        ("info-100", status::INFO_100),
        ("info-500", status::INFO_500),
        ("info-700", status::INFO_700),
        ("success-100", status::SUCCESS_100),
        ("success-500", status::SUCCESS_500),
        ("success-700", status::SUCCESS_700),
        ("warn-100", status::WARN_100),
        ("warn-500", status::WARN_500),
        ("warn-700", status::WARN_700),
        ("unknown-100", status::UNKNOWN_100),
        ("unknown-500", status::UNKNOWN_500),
        ("unknown-700", status::UNKNOWN_700),
        ("text-caution", text::CAUTION),
        ("text-default", text::DEFAULT),
        ("text-hint", text::HINT),
        ("text-accent", text::ACCENT),
        ("text-info", text::INFO),
        ("text-placeholder", text::PLACEHOLDER),
        ("text-secondary", text::SECONDARY),
        ("text-success", text::SUCCESS),
        ("text-unknown", text::UNKNOWN),
        ("text-warn", text::WARN),
        ("text-inverse", text::INVERSE),
    ];

    /// Resolves a color token by its asset name (e.g. `"success-500"`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<Color> {
        TOKENS
            .iter()
            .find(|(token, _)| *token == name)
            .map(|(_, color)| *color)
    }

    /// Parses either a `#RRGGBB` / `#RRGGBBAA` hex value or a token name.
    ///
    /// The `#RGB` / `#RGBA` shorthands are accepted too.
    #[must_use]
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim();
        match value.strip_prefix('#') {
            Some(hex) if hex.is_ascii() => value.parse().ok(),
            Some(_) => None,
            None => by_name(value),
        }
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Reference phone width used by the demo window.
    pub const COMPACT_WIDTH: f32 = 375.0;
    pub const COMPACT_HEIGHT: f32 = 667.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for snack bar text.

    /// Standard body - message text
    pub const BODY: f32 = 14.0;

    /// Button labels
    pub const BUTTON: f32 = 14.0;

    /// Large body - prominent labels in the demo
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(radius::MD > radius::SM);
};
