// SPDX-License-Identifier: MPL-2.0
//! Rendering of snack bars.
//!
//! A snack bar is a rounded card laid out as `[icon] [message] [action]`.
//! Every color is scaled by the current opacity, which is how the fade
//! animations are drawn.

use super::host::Host;
use super::manager::{Manager, Message};
use super::snack::{IconKind, Phase, SnackBar};
use super::style::Style;
use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::widget::{button, container, svg, text, Container, Row, Svg, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Shadow, Theme};
use std::time::Instant;

/// Message line height, relative to the font size.
const MESSAGE_LINE_HEIGHT: f32 = 1.3;

/// Renders a single snack bar at its computed height.
pub fn view<M>(snack: &SnackBar<M>, now: Instant) -> Element<'_, Message> {
    let style = snack.style();
    let alpha = snack.opacity(now);

    let mut content = Row::new()
        .spacing(style.spacing)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = icon(snack.icon(), style, alpha) {
        content = content.push(icon);
    }

    let wrapping = if style.max_lines > 1 {
        text::Wrapping::Word
    } else {
        text::Wrapping::None
    };
    let message = Text::new(snack.message())
        .size(style.font.size)
        .line_height(text::LineHeight::Relative(MESSAGE_LINE_HEIGHT))
        .font(style.font.to_font())
        .color(fade(style.text_color, alpha))
        .wrapping(wrapping);
    // Lines past `max_lines` are cut off.
    content = content.push(
        Container::new(message)
            .width(Length::Fill)
            .max_height(message_max_height(style))
            .clip(true),
    );

    if let Some(action) = snack.action() {
        let label = Text::new(action.title())
            .size(style.action_font.size)
            .font(style.action_font.to_font());
        // Only a visible snack bar reacts to presses.
        let on_press = (snack.phase() == Phase::Visible).then_some(Message::ActionPressed(snack.id()));
        let text_color = fade(style.action_color(), alpha);
        content = content.push(
            button(label)
                .on_press_maybe(on_press)
                .padding(Padding::from([0.0, style.button_inset / 2.0]))
                .style(move |_theme: &Theme, status: button::Status| {
                    action_button_style(text_color, status)
                }),
        );
    }

    let background = fade(style.background, alpha);
    let corner_radius = style.corner_radius;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(snack.height()))
        .padding(Padding::from([0.0, style.in_view_padding]))
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(move |_theme: &Theme| snack_container_style(background, corner_radius))
        .into()
}

/// Renders the host's snack bar anchored to the bottom of its safe area.
///
/// Returns an empty element when nothing is attached.
pub fn overlay<'a, M: Clone>(
    manager: &'a Manager<M>,
    host: &Host,
    now: Instant,
) -> Element<'a, Message> {
    let Some(snack) = manager.current(host.id) else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let inset = snack.style().padding;
    Container::new(view(snack, now))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .padding(Padding {
            top: host.safe_area.top,
            right: host.safe_area.right + inset,
            bottom: host.safe_area.bottom + inset,
            left: host.safe_area.left + inset,
        })
        .into()
}

/// Leading icon for the given kind, tinted with its status color.
fn icon<'a>(kind: IconKind, style: &Style, alpha: f32) -> Option<Element<'a, Message>> {
    let (handle, tint) = match kind {
        IconKind::Success => (icons::check_circle(), palette::status::SUCCESS_500),
        IconKind::Error => (icons::error(), palette::status::WARN_500),
        IconKind::None => return None,
    };
    let tint = fade(tint, alpha);

    Some(
        Svg::new(handle)
            .width(Length::Fixed(style.icon_size))
            .height(Length::Fixed(style.icon_size))
            .style(move |_theme: &Theme, _status| svg::Style { color: Some(tint) })
            .into(),
    )
}

/// Height of `max_lines` lines of message text.
fn message_max_height(style: &Style) -> f32 {
    f32::from(style.max_lines.max(1)) * style.font.size * MESSAGE_LINE_HEIGHT
}

/// Scales a color's alpha by the current opacity.
fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the snack bar card.
fn snack_container_style(background: Color, corner_radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: corner_radius.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Style function for the action button: text only, dimmed when pressed.
fn action_button_style(text_color: Color, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Pressed => Color {
            a: text_color.a * 0.6,
            ..text_color
        },
        button::Status::Active | button::Status::Hovered | button::Status::Disabled => text_color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}
