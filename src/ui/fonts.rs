// SPDX-License-Identifier: MPL-2.0
//! Named font presets.
//!
//! Fonts are requested by family name. When the family is not installed the
//! renderer and the [`measure`](super::snack_bar::measure) backends substitute
//! the system sans-serif face at the same point size; lookups never fail.

use iced::font::{self, Font};
use serde::{Deserialize, Serialize};

/// Family name of the application typeface.
pub const ROBOTO: &str = "Roboto";

/// A font family and weight combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    RobotoRegular,
    RobotoMedium,
    RobotoBold,
    /// The platform default sans-serif face.
    System,
}

impl FontFamily {
    /// Returns the family name to look up, or `None` for the system face.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            FontFamily::RobotoRegular | FontFamily::RobotoMedium | FontFamily::RobotoBold => {
                Some(ROBOTO)
            }
            FontFamily::System => None,
        }
    }

    #[must_use]
    pub fn weight(self) -> font::Weight {
        match self {
            FontFamily::RobotoRegular | FontFamily::System => font::Weight::Normal,
            FontFamily::RobotoMedium => font::Weight::Medium,
            FontFamily::RobotoBold => font::Weight::Bold,
        }
    }

    /// CSS-style numeric weight, as understood by font databases.
    #[must_use]
    pub fn numeric_weight(self) -> u16 {
        match self.weight() {
            font::Weight::Medium => 500,
            font::Weight::Bold => 700,
            _ => 400,
        }
    }
}

/// A font family at a given point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub size: f32,
}

impl FontSpec {
    #[must_use]
    pub const fn new(family: FontFamily, size: f32) -> Self {
        Self { family, size }
    }

    #[must_use]
    pub const fn roboto_regular(size: f32) -> Self {
        Self::new(FontFamily::RobotoRegular, size)
    }

    #[must_use]
    pub const fn roboto_medium(size: f32) -> Self {
        Self::new(FontFamily::RobotoMedium, size)
    }

    #[must_use]
    pub const fn roboto_bold(size: f32) -> Self {
        Self::new(FontFamily::RobotoBold, size)
    }

    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self::new(FontFamily::System, size)
    }

    /// Same size, system face. Used when the named family is unavailable.
    #[must_use]
    pub const fn fallback(self) -> Self {
        Self::system(self.size)
    }

    /// Converts to an iced font descriptor.
    #[must_use]
    pub fn to_font(self) -> Font {
        match self.family.name() {
            Some(name) => Font {
                weight: self.family.weight(),
                ..Font::with_name(name)
            },
            None => Font::DEFAULT,
        }
    }
}
