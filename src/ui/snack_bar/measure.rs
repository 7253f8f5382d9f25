// SPDX-License-Identifier: MPL-2.0
//! Single-line text measurement.
//!
//! Layout only needs the advance width of a string rendered on one line, so
//! the [`TextMeasurer`] trait is deliberately minimal. [`CosmicMeasurer`]
//! shapes text with `cosmic-text` against the installed fonts;
//! [`FixedAdvanceMeasurer`] is a deterministic stand-in for tests and headless
//! hosts.

use crate::ui::fonts::FontSpec;
use cosmic_text::{fontdb, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use std::collections::HashMap;

/// Line height used while shaping, as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measures the single-line width of text.
pub trait TextMeasurer {
    /// Returns the advance width of `text` rendered in `font`, with
    /// `letter_spacing` added after every character.
    fn measure(&mut self, text: &str, font: &FontSpec, letter_spacing: f32) -> f32;
}

/// Extra width contributed by letter spacing.
fn letter_spacing_allowance(text: &str, letter_spacing: f32) -> f32 {
    text.chars().count() as f32 * letter_spacing
}

/// Measurer where every character advances by `size * ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    pub ratio: f32,
}

impl FixedAdvanceMeasurer {
    #[must_use]
    pub const fn new(ratio: f32) -> Self {
        Self { ratio }
    }
}

impl Default for FixedAdvanceMeasurer {
    /// Roughly the average advance of a proportional sans-serif face.
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&mut self, text: &str, font: &FontSpec, letter_spacing: f32) -> f32 {
        let glyphs = text.chars().count() as f32;
        glyphs * font.size * self.ratio + letter_spacing_allowance(text, letter_spacing)
    }
}

/// Measurer backed by `cosmic-text` shaping.
pub struct CosmicMeasurer {
    font_system: FontSystem,
    /// Whether a family name is present in the font database.
    installed: HashMap<&'static str, bool>,
}

impl std::fmt::Debug for CosmicMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicMeasurer")
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}

impl CosmicMeasurer {
    /// Creates a measurer over the system font database.
    #[must_use]
    pub fn new() -> Self {
        Self::from_font_system(FontSystem::new())
    }

    /// Creates a measurer over an explicit font database.
    #[must_use]
    pub fn with_database(db: fontdb::Database) -> Self {
        Self::from_font_system(FontSystem::new_with_locale_and_db("en-US".to_string(), db))
    }

    fn from_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            installed: HashMap::new(),
        }
    }

    /// Registers an in-memory font (e.g. a bundled TTF).
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
        self.installed.clear();
    }

    /// Returns the family shaping will use for `font`.
    ///
    /// Missing named families fall back to the default sans-serif face.
    pub fn resolve_family(&mut self, font: &FontSpec) -> Family<'static> {
        let Some(name) = font.family.name() else {
            return Family::SansSerif;
        };

        let db = self.font_system.db();
        let installed = *self.installed.entry(name).or_insert_with(|| {
            db.faces()
                .any(|face| face.families.iter().any(|(family, _)| family == name))
        });

        if installed {
            Family::Name(name)
        } else {
            log::debug!("font family {name} unavailable, using system sans-serif");
            Family::SansSerif
        }
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&mut self, text: &str, font: &FontSpec, letter_spacing: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let family = self.resolve_family(font);
        let attrs = Attrs::new()
            .family(family)
            .weight(Weight(font.family.numeric_weight()));
        let metrics = Metrics::new(font.size, font.size * LINE_HEIGHT_FACTOR);

        // A fresh buffer has no width constraint, so the text stays on one line.
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let advance = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);

        advance + letter_spacing_allowance(text, letter_spacing)
    }
}
