// SPDX-License-Identifier: MPL-2.0
//! Snack bar notifications.
//!
//! A snack bar is a transient card anchored to the bottom of a host
//! container. It shows an optional status icon, a one- or two-line message and
//! an optional action button, fades in, and dismisses itself once its display
//! duration has elapsed or its action is pressed.
//!
//! # Components
//!
//! - [`style`] - `Style` bundle and the `StyleSheet` override point
//! - [`measure`] - single-line text measurement
//! - [`layout`] - the two-height layout calculation
//! - [`snack`] - `SnackBar` instances and their presentation phases
//! - [`manager`] - `Manager`, the per-host registry driving the lifecycle
//! - [`view`] - rendering
//!
//! # Usage
//!
//! ```ignore
//! use snack_bar::ui::snack_bar::{self, DisplayDuration, IconKind, SnackBar};
//!
//! let snack = SnackBar::make(
//!     &host,
//!     IconKind::Success,
//!     "Photo archived",
//!     DisplayDuration::SHORT,
//!     &snack_bar::DefaultStyle,
//!     &mut measurer,
//! )
//! .with_action("Undo", Some(Message::Undo), &mut measurer);
//!
//! manager.show(snack, now);
//!
//! // In your view function, render the overlay
//! let overlay = snack_bar::overlay(&manager, &host, now).map(Message::SnackBar);
//! ```

mod duration;
mod fade;
mod host;
pub mod layout;
mod manager;
pub mod measure;
mod snack;
pub mod style;
mod view;

pub use duration::DisplayDuration;
pub use host::{Host, HostId};
pub use layout::{Layout, LayoutInput, Lines};
pub use manager::{Manager, Message};
pub use measure::{CosmicMeasurer, FixedAdvanceMeasurer, TextMeasurer};
pub use snack::{Action, IconKind, Phase, SnackBar, SnackId};
pub use style::{DefaultStyle, Style, StyleSheet};
pub use view::{overlay, view};
