// SPDX-License-Identifier: MPL-2.0
//! Height calculation.
//!
//! A snack bar is one of exactly two heights. The message is compared, on a
//! single line, against the horizontal space left once the icon, the action
//! button and the paddings are accounted for; if it does not fit the bar uses
//! its wrapped height.

use super::style::Style;

/// Measured quantities the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    /// Width of the host container.
    pub container_width: f32,
    /// Single-line width of the message.
    pub message_width: f32,
    pub has_icon: bool,
    /// Single-line width of the action title, when an action is set.
    pub action_width: Option<f32>,
}

/// Number of lines the message occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lines {
    Single,
    Wrapped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub icon_width: f32,
    pub button_width: f32,
    pub total_padding: f32,
    pub available_width: f32,
    pub lines: Lines,
    pub height: f32,
}

impl Layout {
    #[must_use]
    pub fn compute(style: &Style, input: LayoutInput) -> Self {
        let icon_width = if input.has_icon {
            style.icon_size + style.spacing
        } else {
            0.0
        };
        let button_width = input
            .action_width
            .map_or(0.0, |title| title + style.spacing + style.button_inset);
        let total_padding =
            2.0 * (style.padding + style.in_view_padding) - style.padding_correction;

        let available_width = input.container_width - icon_width - button_width - total_padding;

        let (lines, height) = if input.message_width > available_width {
            (Lines::Wrapped, style.wrapped_height)
        } else {
            (Lines::Single, style.single_line_height)
        };

        Self {
            icon_width,
            button_width,
            total_padding,
            available_width,
            lines,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(message_width: f32) -> LayoutInput {
        LayoutInput {
            container_width: 375.0,
            message_width,
            has_icon: false,
            action_width: None,
        }
    }

    #[test]
    fn total_padding_includes_correction() {
        let layout = Layout::compute(&Style::default(), input(0.0));
        // 2 * (6 + 16) - 6
        assert_eq!(layout.total_padding, 38.0);
        assert_eq!(layout.available_width, 337.0);
    }

    #[test]
    fn message_exactly_filling_the_space_stays_single_line() {
        let layout = Layout::compute(&Style::default(), input(337.0));
        assert_eq!(layout.lines, Lines::Single);
        assert_eq!(layout.height, 48.0);
    }

    #[test]
    fn message_wider_than_the_space_wraps() {
        let layout = Layout::compute(&Style::default(), input(337.5));
        assert_eq!(layout.lines, Lines::Wrapped);
        assert_eq!(layout.height, 70.0);
    }

    #[test]
    fn icon_and_action_reduce_available_width() {
        let style = Style::default();
        let bare = Layout::compute(&style, input(0.0));
        let with_icon = Layout::compute(
            &style,
            LayoutInput {
                has_icon: true,
                ..input(0.0)
            },
        );
        let with_both = Layout::compute(
            &style,
            LayoutInput {
                has_icon: true,
                action_width: Some(50.0),
                ..input(0.0)
            },
        );

        assert_eq!(
            bare.available_width - with_icon.available_width,
            style.icon_size + style.spacing
        );
        assert_eq!(
            with_icon.available_width - with_both.available_width,
            50.0 + style.spacing + 32.0
        );
    }

    #[test]
    fn height_follows_configured_values() {
        let style = Style {
            single_line_height: 40.0,
            wrapped_height: 64.0,
            ..Style::default()
        };
        assert_eq!(Layout::compute(&style, input(10.0)).height, 40.0);
        assert_eq!(Layout::compute(&style, input(1000.0)).height, 64.0);
    }
}
