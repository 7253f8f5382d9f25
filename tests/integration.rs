// SPDX-License-Identifier: MPL-2.0
//! End-to-end snack bar lifecycle scenarios.

use snack_bar::ui::snack_bar::{
    DefaultStyle, DisplayDuration, FixedAdvanceMeasurer, Host, IconKind, Lines, Manager,
    Message, Phase, SnackBar, Style, TextMeasurer,
};
use cosmic_text::fontdb;
use snack_bar::ui::snack_bar::CosmicMeasurer;
use std::time::{Duration, Instant};

const SHORT_MESSAGE: &str = "Short message";
const TWO_LINES: &str = "Two lines with one action. One to two lines is preferable on mobile.";

#[derive(Debug, Clone, PartialEq)]
enum AppMessage {
    Retry,
}

fn phone() -> Host {
    Host::new(375.0)
}

static TUFFY: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/fonts/Tuffy.ttf"
));

/// Shaping measurer over a bundled face, independent of installed fonts.
fn shaping_measurer() -> CosmicMeasurer {
    let mut db = fontdb::Database::new();
    db.set_sans_serif_family("Tuffy");
    let mut measurer = CosmicMeasurer::with_database(db);
    measurer.load_font_data(TUFFY.to_vec());
    measurer
}

fn make(host: &Host, icon: IconKind, message: &str) -> SnackBar<AppMessage> {
    SnackBar::make(
        host,
        icon,
        message,
        DisplayDuration::SHORT,
        &DefaultStyle,
        &mut FixedAdvanceMeasurer::default(),
    )
}

#[test]
fn short_message_is_single_line_height() {
    let snack = make(&phone(), IconKind::None, SHORT_MESSAGE);
    assert_eq!(snack.height(), 48.0);
}

#[test]
fn long_message_with_action_is_wrapped_height() {
    let mut measurer = FixedAdvanceMeasurer::default();
    let snack = make(&phone(), IconKind::None, TWO_LINES).with_action(
        "BUTTON",
        None,
        &mut measurer,
    );
    assert_eq!(snack.layout().lines, Lines::Wrapped);
    assert_eq!(snack.height(), 70.0);
}

#[test]
fn shaped_short_message_is_single_line_height() {
    let mut measurer = shaping_measurer();
    let snack: SnackBar<AppMessage> = SnackBar::make(
        &phone(),
        IconKind::None,
        SHORT_MESSAGE,
        DisplayDuration::SHORT,
        &DefaultStyle,
        &mut measurer,
    );

    assert_eq!(snack.height(), 48.0);
}

#[test]
fn shaped_long_message_with_action_is_wrapped_height() {
    let mut measurer = shaping_measurer();
    let snack: SnackBar<AppMessage> = SnackBar::make(
        &phone(),
        IconKind::None,
        TWO_LINES,
        DisplayDuration::SHORT,
        &DefaultStyle,
        &mut measurer,
    )
    .with_action("BUTTON", None, &mut measurer);

    assert!(snack.layout().button_width > Style::default().spacing + 32.0);
    assert_eq!(snack.height(), 70.0);
}

#[test]
fn height_switches_exactly_at_available_width() {
    let host = phone();
    let style = Style::default();
    let mut measurer = FixedAdvanceMeasurer::default();

    // Grow the message one character at a time; the height must flip once,
    // precisely when the measured width first exceeds the available width.
    let mut message = String::new();
    let mut flipped = false;
    for _ in 0..80 {
        message.push('x');
        let width = measurer.measure(&message, &style.font, style.measure_letter_spacing);
        let snack = make(&host, IconKind::None, &message);
        let expected = if width > snack.layout().available_width {
            flipped = true;
            70.0
        } else {
            assert!(!flipped, "height returned to single line");
            48.0
        };
        assert_eq!(snack.height(), expected);
    }
    assert!(flipped);
}

#[test]
fn icon_and_action_shrink_available_width() {
    let host = phone();
    let style = Style::default();
    let mut measurer = FixedAdvanceMeasurer::default();

    let bare = make(&host, IconKind::None, SHORT_MESSAGE);
    let with_icon = make(&host, IconKind::Error, SHORT_MESSAGE);
    let with_action = make(&host, IconKind::Error, SHORT_MESSAGE).with_action(
        "Retry",
        Some(AppMessage::Retry),
        &mut measurer,
    );

    let title_width = measurer.measure("RETRY", &style.action_font, style.measure_letter_spacing);
    assert_eq!(
        bare.layout().available_width - with_icon.layout().available_width,
        style.icon_size + style.spacing
    );
    let delta = with_icon.layout().available_width - with_action.layout().available_width;
    assert!((delta - (title_width + style.spacing + 32.0)).abs() < 1e-3);
}

#[test]
fn full_lifecycle_with_automatic_dismissal() {
    let host = phone();
    let mut manager = Manager::new();
    let start = Instant::now();
    let id = manager.show(make(&host, IconKind::Success, SHORT_MESSAGE), start);

    let snack = manager.get(id).expect("attached");
    assert_eq!(snack.opacity(start), 0.0);
    assert_eq!(snack.opacity(start + Duration::from_millis(500)), 1.0);

    let deadline = start + DisplayDuration::SHORT.as_duration();
    manager.update(Message::Tick(deadline), deadline);
    let snack = manager.get(id).expect("still attached while fading");
    assert_eq!(snack.phase(), Phase::Leaving);
    assert!(snack.opacity(deadline + Duration::from_millis(250)) < 1.0);

    let faded = deadline + Duration::from_millis(500);
    manager.update(Message::Tick(faded), faded);
    assert!(manager.current(host.id).is_none());
}

#[test]
fn user_dismissal_supersedes_timer() {
    let host = phone();
    let mut manager = Manager::new();
    let start = Instant::now();
    let id = manager.show(make(&host, IconKind::None, SHORT_MESSAGE), start);

    let tapped = start + Duration::from_millis(700);
    assert!(manager.dismiss(id, tapped));
    assert!(!manager.dismiss(id, tapped));

    // Detached before the timer fires; the timer is then a no-op.
    manager.tick(tapped + Duration::from_millis(500));
    assert!(!manager.has_active());
    manager.tick(start + DisplayDuration::SHORT.as_duration());
    assert!(!manager.dismiss(id, start + DisplayDuration::SHORT.as_duration()));
    assert!(!manager.has_active());
}

#[test]
fn action_callback_fires_after_dismissal() {
    let host = phone();
    let mut measurer = FixedAdvanceMeasurer::default();
    let mut manager = Manager::new();
    let now = Instant::now();
    let id = manager.show(
        make(&host, IconKind::Error, "Upload failed").with_action(
            "Retry",
            Some(AppMessage::Retry),
            &mut measurer,
        ),
        now,
    );

    let callback = manager.update(Message::ActionPressed(id), now);
    assert_eq!(callback, Some(AppMessage::Retry));
    assert_eq!(manager.get(id).map(SnackBar::phase), Some(Phase::Leaving));
}

#[test]
fn showing_on_busy_host_leaves_exactly_one() {
    let host = phone();
    let mut manager = Manager::new();
    let now = Instant::now();
    for message in ["one", "two", "three"] {
        manager.show(make(&host, IconKind::None, message), now);
    }

    assert_eq!(manager.attached_count(), 1);
    assert_eq!(
        manager.current(host.id).map(SnackBar::message),
        Some("three")
    );
}

#[test]
fn set_action_after_show_uses_button_width() {
    let host = phone();
    let mut manager = Manager::new();
    let now = Instant::now();
    let id = manager.show(make(&host, IconKind::Success, SHORT_MESSAGE), now);
    let before = manager.get(id).map(|snack| snack.layout().available_width);

    let mut measurer = FixedAdvanceMeasurer::default();
    let snack = manager.get_mut(id).expect("attached");
    snack.set_action("Open", Some(AppMessage::Retry), &mut measurer);
    let layout = *snack.layout();

    assert_eq!(before.map(|width| width - layout.button_width), Some(layout.available_width));
    assert_eq!(snack.phase(), Phase::Visible);
}
