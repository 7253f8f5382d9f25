// SPDX-License-Identifier: MPL-2.0
//! Demo application.
//!
//! A single window with a "Show" button. Each press presents the sample
//! snack bar at the bottom of the window, replacing the previous one. Window
//! resizes relayout the current snack bar.

mod message;
mod subscription;

pub use message::{Flags, Message, Variant};

use crate::config;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::snack_bar::{
    self, CosmicMeasurer, DisplayDuration, Host, IconKind, SnackBar, Style, StyleSheet,
    TextMeasurer,
};
use iced::widget::{button, text, Column, Container, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task};
use std::time::Instant;

/// Message presented by the demo.
pub const SAMPLE_MESSAGE: &str =
    "Two lines with one action. One to two lines is preferable on mobile.";

/// Style sheet of the [`Variant::App`] snack bars.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSnackBar;

impl StyleSheet for AppSnackBar {
    fn style(&self) -> Style {
        Style {
            background: palette::status::WARN_500,
            text_color: palette::status::SUCCESS_500,
            ..Style::default()
        }
    }
}

/// Root Iced application state.
pub struct App {
    host: Host,
    snacks: snack_bar::Manager<Message>,
    measurer: Box<dyn TextMeasurer>,
    style: Style,
    duration: DisplayDuration,
    icon: IconKind,
    action: Option<String>,
    variant: Variant,
    /// Time of the latest tick; drives fade rendering.
    now: Instant,
    undo_count: u32,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::COMPACT_WIDTH, sizing::COMPACT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_measurer(flags, Box::new(CosmicMeasurer::new()))
    }

    fn with_measurer(flags: Flags, measurer: Box<dyn TextMeasurer>) -> (Self, Task<Message>) {
        let (config, warning) = match &flags.config_path {
            Some(path) => match config::load_from_path(path) {
                Ok(config) => (config, None),
                Err(err) => (config::Config::default(), Some(err.to_string())),
            },
            None => config::load(),
        };
        if let Some(warning) = warning {
            log::warn!("using default snack bar style: {warning}");
        }

        let style = config.style().unwrap_or_default();
        let duration = if flags.long {
            DisplayDuration::LONG
        } else {
            config.duration()
        };

        let app = Self {
            host: Host::new(sizing::COMPACT_WIDTH),
            snacks: snack_bar::Manager::new(),
            measurer,
            style,
            duration,
            icon: flags.icon,
            action: flags.action,
            variant: flags.variant,
            now: Instant::now(),
            undo_count: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Snack Bar")
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_snack_bar_subscription(&self.snacks, self.now),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPressed => {
                self.now = Instant::now();
                let snack = self.make_snack();
                self.snacks.show(snack, self.now);
                Task::none()
            }
            Message::Undo => {
                self.undo_count += 1;
                log::info!("undo pressed ({} so far)", self.undo_count);
                Task::none()
            }
            Message::SnackBar(message) => {
                self.now = match message {
                    snack_bar::Message::Tick(instant) => instant,
                    _ => Instant::now(),
                };
                match self.snacks.update(message, self.now) {
                    Some(action) => self.update(action),
                    None => Task::none(),
                }
            }
            Message::WindowResized(size) => {
                self.host.set_width(size.width);
                self.snacks.resize_host(&self.host);
                Task::none()
            }
        }
    }

    fn make_snack(&mut self) -> SnackBar<Message> {
        let mut snack = match self.variant {
            Variant::Default => SnackBar::make(
                &self.host,
                self.icon,
                SAMPLE_MESSAGE,
                self.duration,
                &self.style,
                self.measurer.as_mut(),
            ),
            Variant::App => SnackBar::make(
                &self.host,
                self.icon,
                SAMPLE_MESSAGE,
                self.duration,
                &AppSnackBar,
                self.measurer.as_mut(),
            ),
        };
        if let Some(title) = &self.action {
            snack.set_action(title.clone(), Some(Message::Undo), self.measurer.as_mut());
        }
        snack
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text(format!("Undo pressed {} times", self.undo_count)).size(typography::BODY))
            .push(
                button(text("Show").size(typography::BODY_LG))
                    .on_press(Message::ShowPressed)
                    .padding([spacing::XS, spacing::LG]),
            );

        let base = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let overlay = snack_bar::overlay(&self.snacks, &self.host, self.now).map(Message::SnackBar);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(overlay)
            .into()
    }
}
