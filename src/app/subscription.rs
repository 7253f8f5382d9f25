// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::snack_bar;
use iced::{event, window, Subscription};
use std::time::Instant;

/// Tracks window resizes; the window is the snack bar host.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Ticks driving snack bar deadlines and fades, only while one is attached.
pub fn create_snack_bar_subscription(
    snacks: &snack_bar::Manager<Message>,
    now: Instant,
) -> Subscription<Message> {
    snacks.subscription(now).map(Message::SnackBar)
}
