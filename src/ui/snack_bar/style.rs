// SPDX-License-Identifier: MPL-2.0
//! Visual parameters of a snack bar.
//!
//! A [`Style`] is a plain value read once when a snack bar is made. Variants
//! are produced either by building a `Style` directly or by implementing
//! [`StyleSheet`], the single override point consumed by
//! [`SnackBar::make`](super::SnackBar::make).

use crate::config::{StyleConfig, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::error::{Error, Result};
use crate::ui::design_tokens::{palette, radius, sizing, typography};
use crate::ui::fonts::FontSpec;
use iced::Color;
use std::time::Duration;

/// Height of a snack bar whose message fits on one line.
pub const SINGLE_LINE_HEIGHT: f32 = 48.0;
/// Height of a snack bar whose message wraps.
pub const WRAPPED_HEIGHT: f32 = 70.0;
/// Horizontal inset allowance around the action title.
pub const BUTTON_INSET: f32 = 32.0;
/// Subtracted from the total padding: the container inset and the content
/// inset overlap on the horizontal axis.
pub const PADDING_CORRECTION: f32 = 6.0;
/// Letter spacing allowance added when measuring the message and the action
/// title.
pub const MEASURE_LETTER_SPACING: f32 = 0.25;
/// Duration of the fade-in and fade-out animations.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Outer padding between the snack bar and the host's safe area.
pub const PADDING: f32 = 6.0;
/// Inset of the content inside the snack bar.
pub const IN_VIEW_PADDING: f32 = 16.0;
/// Gap between icon, message and action.
pub const SPACING: f32 = 10.0;

const _: () = {
    assert!(SINGLE_LINE_HEIGHT < WRAPPED_HEIGHT);
    assert!(PADDING_CORRECTION < 2.0 * (PADDING + IN_VIEW_PADDING));
};

/// Visual parameters consumed read-only by the snack bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    // Container
    pub background: Color,
    pub corner_radius: f32,
    pub padding: f32,
    pub in_view_padding: f32,
    pub spacing: f32,
    // Label
    pub text_color: Color,
    pub font: FontSpec,
    pub max_lines: u8,
    // Icon
    pub icon_size: f32,
    // Action
    pub action_text_color: Color,
    pub action_text_alpha: f32,
    pub action_font: FontSpec,
    // Geometry
    pub single_line_height: f32,
    pub wrapped_height: f32,
    pub button_inset: f32,
    pub padding_correction: f32,
    pub measure_letter_spacing: f32,
    // Animation
    pub fade_duration: Duration,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: palette::background::SNACKBAR,
            corner_radius: radius::SM,
            padding: PADDING,
            in_view_padding: IN_VIEW_PADDING,
            spacing: SPACING,
            text_color: palette::text::INVERSE,
            font: FontSpec::roboto_regular(typography::BODY),
            max_lines: 2,
            icon_size: sizing::ICON_MD,
            action_text_color: palette::text::ACCENT,
            action_text_alpha: 1.0,
            action_font: FontSpec::roboto_medium(typography::BUTTON),
            single_line_height: SINGLE_LINE_HEIGHT,
            wrapped_height: WRAPPED_HEIGHT,
            button_inset: BUTTON_INSET,
            padding_correction: PADDING_CORRECTION,
            measure_letter_spacing: MEASURE_LETTER_SPACING,
            fade_duration: FADE_DURATION,
        }
    }
}

impl Style {
    /// Action title color with its alpha applied.
    #[must_use]
    pub fn action_color(&self) -> Color {
        Color {
            a: self.action_text_color.a * self.action_text_alpha,
            ..self.action_text_color
        }
    }

    /// Overlays user overrides on top of this style.
    ///
    /// Colors accept `#RRGGBB`, `#RRGGBBAA` or a palette token name.
    pub fn apply(mut self, config: &StyleConfig) -> Result<Self> {
        if let Some(value) = &config.background {
            self.background = parse_color("background", value)?;
        }
        if let Some(value) = &config.text_color {
            self.text_color = parse_color("text_color", value)?;
        }
        if let Some(value) = &config.action_text_color {
            self.action_text_color = parse_color("action_text_color", value)?;
        }
        if let Some(alpha) = config.action_text_alpha {
            self.action_text_alpha = alpha.clamp(0.0, 1.0);
        }
        if let Some(family) = config.font {
            self.font.family = family;
        }
        if let Some(size) = config.font_size {
            self.font.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(family) = config.action_font {
            self.action_font.family = family;
        }
        if let Some(size) = config.action_font_size {
            self.action_font.size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(value) = config.corner_radius {
            self.corner_radius = value;
        }
        if let Some(value) = config.padding {
            self.padding = value;
        }
        if let Some(value) = config.in_view_padding {
            self.in_view_padding = value;
        }
        if let Some(value) = config.spacing {
            self.spacing = value;
        }
        if let Some(value) = config.max_lines {
            self.max_lines = value.max(1);
        }
        Ok(self)
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
    palette::parse(value)
        .ok_or_else(|| Error::Config(format!("invalid color for {field}: {value}")))
}

/// Supplies the style a snack bar is built with.
///
/// Implement this to provide a variant without touching the snack bar's
/// logic; the default returns [`Style::default`].
pub trait StyleSheet {
    fn style(&self) -> Style {
        Style::default()
    }
}

/// The canonical style.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl StyleSheet for DefaultStyle {}

impl StyleSheet for Style {
    fn style(&self) -> Style {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fonts::FontFamily;

    struct Inverted;

    impl StyleSheet for Inverted {
        fn style(&self) -> Style {
            Style {
                background: palette::WHITE,
                text_color: palette::BLACK,
                ..Style::default()
            }
        }
    }

    #[test]
    fn default_sheet_returns_default_style() {
        assert_eq!(DefaultStyle.style(), Style::default());
    }

    #[test]
    fn custom_sheet_overrides_only_what_it_sets() {
        let style = Inverted.style();
        assert_eq!(style.background, palette::WHITE);
        assert_eq!(style.padding, PADDING);
        assert_eq!(style.wrapped_height, WRAPPED_HEIGHT);
    }

    #[test]
    fn action_color_applies_alpha() {
        let style = Style {
            action_text_alpha: 0.5,
            ..Style::default()
        };
        assert_eq!(style.action_color().a, 0.5);
    }

    #[test]
    fn apply_overlays_config_values() {
        let config = StyleConfig {
            background: Some("warn-500".into()),
            text_color: Some("#00FF00".into()),
            font: Some(FontFamily::RobotoBold),
            padding: Some(12.0),
            max_lines: Some(0),
            ..StyleConfig::default()
        };

        let style = Style::default().apply(&config).unwrap();
        assert_eq!(style.background, palette::status::WARN_500);
        assert_eq!(style.text_color.g, 1.0);
        assert_eq!(style.font.family, FontFamily::RobotoBold);
        assert_eq!(style.font.size, typography::BODY);
        assert_eq!(style.padding, 12.0);
        assert_eq!(style.max_lines, 1);
    }

    #[test]
    fn apply_clamps_font_sizes() {
        let config = StyleConfig {
            font_size: Some(2.0),
            action_font_size: Some(200.0),
            ..StyleConfig::default()
        };

        let style = Style::default().apply(&config).unwrap();
        assert_eq!(style.font.size, MIN_FONT_SIZE);
        assert_eq!(style.action_font.size, MAX_FONT_SIZE);
    }

    #[test]
    fn apply_rejects_unknown_colors() {
        let config = StyleConfig {
            action_text_color: Some("not-a-token".into()),
            ..StyleConfig::default()
        };

        let err = Style::default().apply(&config).unwrap_err();
        assert!(matches!(err, Error::Config(message) if message.contains("action_text_color")));
    }
}
