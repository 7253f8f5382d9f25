// SPDX-License-Identifier: MPL-2.0
//! A single snack bar instance.
//!
//! A `SnackBar` owns its message, optional action, style and computed
//! [`Layout`]. Presentation state lives in [`Phase`]; transitions are driven
//! by the [`Manager`](super::Manager), which is the only owner of attached
//! snack bars.

use super::duration::DisplayDuration;
use super::fade::Fade;
use super::host::{Host, HostId};
use super::layout::{Layout, LayoutInput};
use super::measure::TextMeasurer;
use super::style::{Style, StyleSheet};
use crate::ui::design_tokens::opacity;
use std::str::FromStr;
use std::time::Instant;

/// Unique identifier for a snack bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackId(u64);

impl SnackId {
    /// Creates a new unique snack bar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SnackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading icon shown before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconKind {
    Success,
    Error,
    #[default]
    None,
}

impl FromStr for IconKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "success" => Ok(IconKind::Success),
            "error" => Ok(IconKind::Error),
            "none" => Ok(IconKind::None),
            other => Err(format!("unknown icon kind: {other}")),
        }
    }
}

/// Presentation state.
///
/// `Leaving` is the fade-out part of being visible: the snack bar is still
/// attached but further dismissals have no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unattached,
    Visible,
    Leaving,
    Removed,
}

/// Trailing button and the message it produces when pressed.
#[derive(Debug, Clone)]
pub struct Action<M> {
    title: String,
    width: f32,
    on_press: Option<M>,
}

impl<M> Action<M> {
    /// Upper-cased title as displayed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn on_press(&self) -> Option<&M> {
        self.on_press.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct SnackBar<M> {
    id: SnackId,
    host: HostId,
    icon: IconKind,
    message: String,
    action: Option<Action<M>>,
    duration: DisplayDuration,
    style: Style,
    container_width: f32,
    message_width: f32,
    layout: Layout,
    phase: Phase,
    fade: Option<Fade>,
    shown_at: Option<Instant>,
}

impl<M> SnackBar<M> {
    /// Builds a snack bar for `host` and computes its layout.
    ///
    /// Nothing is displayed until the snack bar is handed to
    /// [`Manager::show`](super::Manager::show).
    pub fn make(
        host: &Host,
        icon: IconKind,
        message: impl Into<String>,
        duration: DisplayDuration,
        sheet: &impl StyleSheet,
        measurer: &mut dyn TextMeasurer,
    ) -> Self {
        let style = sheet.style();
        let message = message.into();
        let message_width = measurer.measure(&message, &style.font, style.measure_letter_spacing);
        let layout = Layout::compute(
            &style,
            LayoutInput {
                container_width: host.width,
                message_width,
                has_icon: icon != IconKind::None,
                action_width: None,
            },
        );

        Self {
            id: SnackId::new(),
            host: host.id,
            icon,
            message,
            action: None,
            duration,
            style,
            container_width: host.width,
            message_width,
            layout,
            phase: Phase::Unattached,
            fade: None,
            shown_at: None,
        }
    }

    /// Builder form of [`set_action`](Self::set_action).
    #[must_use]
    pub fn with_action(
        mut self,
        title: impl Into<String>,
        on_press: Option<M>,
        measurer: &mut dyn TextMeasurer,
    ) -> Self {
        self.set_action(title, on_press, measurer);
        self
    }

    /// Adds (or replaces) the trailing action button and recomputes the layout.
    ///
    /// Pressing the button dismisses the snack bar; `on_press` is then handed
    /// back to the caller by [`Manager::update`](super::Manager::update).
    pub fn set_action(
        &mut self,
        title: impl Into<String>,
        on_press: Option<M>,
        measurer: &mut dyn TextMeasurer,
    ) -> &mut Self {
        let title = title.into().to_uppercase();
        let width = measurer.measure(
            &title,
            &self.style.action_font,
            self.style.measure_letter_spacing,
        );
        self.action = Some(Action {
            title,
            width,
            on_press,
        });
        self.relayout(self.container_width);
        log::debug!(
            "snack bar {:?} action set, height {}",
            self.id,
            self.layout.height
        );
        self
    }

    /// Recomputes the layout for a new container width.
    pub fn relayout(&mut self, container_width: f32) {
        self.container_width = container_width;
        self.layout = Layout::compute(
            &self.style,
            LayoutInput {
                container_width,
                message_width: self.message_width,
                has_icon: self.icon != IconKind::None,
                action_width: self.action.as_ref().map(|action| action.width),
            },
        );
    }

    /// Unattached → Visible. Starts the fade-in.
    pub(super) fn show(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Unattached {
            return false;
        }
        self.phase = Phase::Visible;
        self.shown_at = Some(now);
        self.fade = Some(Fade::new(
            opacity::TRANSPARENT,
            opacity::OPAQUE,
            now,
            self.style.fade_duration,
        ));
        true
    }

    /// Visible → Leaving. Starts the fade-out from the current opacity.
    ///
    /// Returns `false`, changing nothing, in every other phase.
    pub(super) fn dismiss(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        let from = self.opacity(now);
        self.phase = Phase::Leaving;
        self.fade = Some(Fade::new(
            from,
            opacity::TRANSPARENT,
            now,
            self.style.fade_duration,
        ));
        true
    }

    /// Leaving → Removed once the fade-out has completed.
    pub(super) fn finish(&mut self, now: Instant) -> bool {
        let faded = self.fade.is_some_and(|fade| fade.is_finished(now));
        if self.phase == Phase::Leaving && faded {
            self.phase = Phase::Removed;
        }
        self.phase == Phase::Removed
    }

    /// Returns to `Unattached`, dropping any fade and show timestamp.
    pub(super) fn reset(&mut self) {
        self.phase = Phase::Unattached;
        self.fade = None;
        self.shown_at = None;
    }

    /// Detaches immediately, without animation.
    pub(super) fn detach(&mut self) {
        self.phase = Phase::Removed;
        self.fade = None;
    }

    /// Whether the automatic dismissal is due.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    /// When the automatic dismissal fires, once shown.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.shown_at
            .map(|shown_at| shown_at + self.duration.as_duration())
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match (self.phase, self.fade) {
            (Phase::Visible | Phase::Leaving, Some(fade)) => fade.value(now),
            _ => opacity::TRANSPARENT,
        }
    }

    /// Whether an opacity animation is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase, Phase::Visible | Phase::Leaving)
            && self.fade.is_some_and(|fade| !fade.is_finished(now))
    }

    #[must_use]
    pub fn id(&self) -> SnackId {
        self.id
    }

    #[must_use]
    pub fn host(&self) -> HostId {
        self.host
    }

    #[must_use]
    pub fn icon(&self) -> IconKind {
        self.icon
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action<M>> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.layout.height
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snack_bar::layout::Lines;
    use crate::ui::snack_bar::measure::FixedAdvanceMeasurer;
    use crate::ui::snack_bar::style::DefaultStyle;
    use std::time::Duration;

    const TWO_LINES: &str = "Two lines with one action. One to two lines is preferable on mobile.";

    fn make(icon: IconKind, message: &str) -> SnackBar<()> {
        let host = Host::new(375.0);
        SnackBar::make(
            &host,
            icon,
            message,
            DisplayDuration::SHORT,
            &DefaultStyle,
            &mut FixedAdvanceMeasurer::default(),
        )
    }

    #[test]
    fn short_message_is_single_line() {
        let snack = make(IconKind::None, "Short message");
        assert_eq!(snack.layout().lines, Lines::Single);
        assert_eq!(snack.height(), 48.0);
    }

    #[test]
    fn long_message_with_action_wraps() {
        let mut measurer = FixedAdvanceMeasurer::default();
        let snack = make(IconKind::None, TWO_LINES).with_action("button", None, &mut measurer);
        assert_eq!(snack.height(), 70.0);
        assert_eq!(snack.action().unwrap().title(), "BUTTON");
    }

    #[test]
    fn action_title_is_measured_with_the_measurement_allowance() {
        let mut measurer = FixedAdvanceMeasurer::default();
        let bare = make(IconKind::None, "Hi");
        let with_action = bare.clone().with_action("ok", Some(()), &mut measurer);

        let style = bare.style();
        let title_width = 2.0 * style.action_font.size * 0.5 + 2.0 * style.measure_letter_spacing;
        let expected = title_width + style.spacing + style.button_inset;
        let reduction = bare.layout().available_width - with_action.layout().available_width;
        assert!((reduction - expected).abs() < 1e-3);
    }

    #[test]
    fn icon_kind_parses_case_insensitively() {
        assert_eq!("Success".parse::<IconKind>(), Ok(IconKind::Success));
        assert_eq!("error".parse::<IconKind>(), Ok(IconKind::Error));
        assert!("warning".parse::<IconKind>().is_err());
    }

    #[test]
    fn lifecycle_runs_through_every_phase() {
        let mut snack = make(IconKind::Success, "Saved");
        let start = Instant::now();
        assert_eq!(snack.phase(), Phase::Unattached);
        assert_eq!(snack.opacity(start), 0.0);

        assert!(snack.show(start));
        assert_eq!(snack.phase(), Phase::Visible);
        assert_eq!(snack.opacity(start + Duration::from_secs(1)), 1.0);

        let dismissed_at = start + Duration::from_secs(1);
        assert!(snack.dismiss(dismissed_at));
        assert_eq!(snack.phase(), Phase::Leaving);
        assert!(!snack.finish(dismissed_at + Duration::from_millis(100)));
        assert!(snack.finish(dismissed_at + Duration::from_millis(500)));
        assert_eq!(snack.phase(), Phase::Removed);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut snack = make(IconKind::None, "Saved");
        let start = Instant::now();
        snack.show(start);

        assert!(snack.dismiss(start));
        let fade = snack.fade;
        assert!(!snack.dismiss(start + Duration::from_millis(200)));
        assert_eq!(snack.fade, fade);
    }

    #[test]
    fn dismiss_before_show_is_a_no_op() {
        let mut snack = make(IconKind::None, "Saved");
        assert!(!snack.dismiss(Instant::now()));
        assert_eq!(snack.phase(), Phase::Unattached);
    }

    #[test]
    fn show_twice_is_rejected() {
        let mut snack = make(IconKind::None, "Saved");
        let start = Instant::now();
        assert!(snack.show(start));
        assert!(!snack.show(start + Duration::from_secs(1)));
        assert_eq!(snack.deadline(), Some(start + DisplayDuration::SHORT.as_duration()));
    }

    #[test]
    fn reset_allows_a_fresh_show() {
        let mut snack = make(IconKind::None, "Saved");
        let start = Instant::now();
        snack.show(start);
        snack.detach();

        snack.reset();
        assert_eq!(snack.phase(), Phase::Unattached);
        assert_eq!(snack.deadline(), None);

        let later = start + Duration::from_secs(5);
        assert!(snack.show(later));
        assert_eq!(snack.deadline(), Some(later + DisplayDuration::SHORT.as_duration()));
    }

    #[test]
    fn relayout_tracks_container_width() {
        let mut snack = make(IconKind::None, "Short message");
        snack.relayout(80.0);
        assert_eq!(snack.height(), 70.0);
        snack.relayout(375.0);
        assert_eq!(snack.height(), 48.0);
    }
}
