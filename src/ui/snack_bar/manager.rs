// SPDX-License-Identifier: MPL-2.0
//! Snack bar lifecycle management.
//!
//! The `Manager` keeps at most one snack bar per host. Showing a snack bar on
//! a host replaces whatever that host was displaying; dismissals are
//! idempotent, so the automatic timer and a button press can race freely.

use super::host::{Host, HostId};
use super::snack::{Phase, SnackBar, SnackId};
use iced::{time, Subscription};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Tick interval while a fade animation is running.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Tick interval while snack bars are merely waiting for their deadline.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Messages for snack bar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific snack bar by ID.
    Dismiss(SnackId),
    /// The action button of a snack bar was pressed.
    ActionPressed(SnackId),
    /// Tick for auto-dismiss deadlines and fade progress.
    Tick(Instant),
}

/// Host-scoped registry of attached snack bars.
#[derive(Debug)]
pub struct Manager<M> {
    attached: BTreeMap<HostId, SnackBar<M>>,
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self {
            attached: BTreeMap::new(),
        }
    }
}

impl<M: Clone> Manager<M> {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `snack` to its host and starts presenting it.
    ///
    /// Any snack bar already attached to the same host is detached first,
    /// without animation. The automatic dismissal is due `duration` after `now`.
    ///
    /// A copy of a snack bar that was already shown starts over from
    /// `Unattached`.
    pub fn show(&mut self, mut snack: SnackBar<M>, now: Instant) -> SnackId {
        let host = snack.host();
        let id = snack.id();

        if snack.phase() != Phase::Unattached {
            log::debug!("snack bar {:?} shown again from {:?}", id, snack.phase());
            snack.reset();
        }

        if let Some(mut previous) = self.attached.remove(&host) {
            previous.detach();
            log::debug!("snack bar {:?} replaced by {:?}", previous.id(), id);
        }

        let shown = snack.show(now);
        debug_assert!(shown, "snack bar {id:?} was not unattached");
        log::debug!(
            "snack bar {:?} shown on host {:?} for {:?}",
            id,
            host,
            snack.duration().as_duration()
        );
        self.attached.insert(host, snack);
        id
    }

    /// Starts dismissing a snack bar.
    ///
    /// Returns `true` only for the call that actually starts the fade-out;
    /// repeated calls, or calls for a detached snack bar, do nothing.
    pub fn dismiss(&mut self, id: SnackId, now: Instant) -> bool {
        let dismissed = self.get_mut(id).is_some_and(|snack| snack.dismiss(now));
        if dismissed {
            log::debug!("snack bar {:?} dismissed", id);
        }
        dismissed
    }

    /// Fires due automatic dismissals and detaches faded-out snack bars.
    pub fn tick(&mut self, now: Instant) {
        for snack in self.attached.values_mut() {
            if snack.is_due(now) && snack.dismiss(now) {
                log::debug!("snack bar {:?} expired", snack.id());
            }
        }

        self.attached.retain(|_, snack| {
            let removed = snack.finish(now);
            if removed {
                log::debug!("snack bar {:?} detached", snack.id());
            }
            !removed
        });
    }

    /// Handles a snack bar message.
    ///
    /// For [`Message::ActionPressed`] the snack bar is dismissed first; the
    /// caller's action message, if any, is then returned for dispatch.
    pub fn update(&mut self, message: Message, now: Instant) -> Option<M> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now);
                None
            }
            Message::ActionPressed(id) => {
                let on_press = self
                    .get(id)
                    .and_then(|snack| snack.action())
                    .and_then(|action| action.on_press().cloned());
                if self.dismiss(id, now) {
                    on_press
                } else {
                    None
                }
            }
            Message::Tick(instant) => {
                self.tick(instant);
                None
            }
        }
    }

    /// Recomputes the layout of the host's snack bar after a resize.
    pub fn resize_host(&mut self, host: &Host) {
        if let Some(snack) = self.attached.get_mut(&host.id) {
            snack.relayout(host.width);
        }
    }

    /// Returns the snack bar attached to `host`, if any.
    #[must_use]
    pub fn current(&self, host: HostId) -> Option<&SnackBar<M>> {
        self.attached.get(&host)
    }

    #[must_use]
    pub fn get(&self, id: SnackId) -> Option<&SnackBar<M>> {
        self.attached.values().find(|snack| snack.id() == id)
    }

    /// Mutable access, e.g. to set an action after the snack bar is shown.
    pub fn get_mut(&mut self, id: SnackId) -> Option<&mut SnackBar<M>> {
        self.attached.values_mut().find(|snack| snack.id() == id)
    }

    /// Returns the number of attached snack bars.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Returns whether any snack bar is attached.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.attached.is_empty()
    }

    /// Periodic ticks while anything is attached; faster while animating.
    pub fn subscription(&self, now: Instant) -> Subscription<Message> {
        if self.attached.values().any(|snack| snack.is_animating(now)) {
            time::every(ANIMATION_TICK).map(Message::Tick)
        } else if self.has_active() {
            time::every(IDLE_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
