// SPDX-License-Identifier: MPL-2.0
//! Display duration domain type.
//!
//! A snack bar stays on screen for a positive amount of time before it
//! dismisses itself. This newtype enforces positivity and provides the named
//! presets.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest accepted display duration.
const MIN_DURATION: Duration = Duration::from_millis(1);

/// How long a snack bar is displayed before it dismisses itself.
///
/// # Example
///
/// ```
/// use snack_bar::ui::snack_bar::DisplayDuration;
/// use std::time::Duration;
///
/// assert_eq!(DisplayDuration::SHORT.as_duration(), Duration::from_millis(1500));
///
/// // Zero is clamped to the minimum
/// assert!(!DisplayDuration::new(Duration::ZERO).as_duration().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Repr", into = "Repr")]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// Brief confirmation (1.5 s).
    pub const SHORT: Self = Self(Duration::from_millis(1500));
    /// Messages that need more reading time (2.75 s).
    pub const LONG: Self = Self(Duration::from_millis(2750));

    /// Creates a display duration, clamping zero to the minimum.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(duration.max(MIN_DURATION))
    }

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::SHORT
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// Serialized form: `"short"`, `"long"` or a millisecond count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum Repr {
    Preset(Preset),
    Millis(u64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Preset {
    Short,
    Long,
}

impl From<Repr> for DisplayDuration {
    fn from(repr: Repr) -> Self {
        match repr {
            Repr::Preset(Preset::Short) => Self::SHORT,
            Repr::Preset(Preset::Long) => Self::LONG,
            Repr::Millis(millis) => Self::from_millis(millis),
        }
    }
}

impl From<DisplayDuration> for Repr {
    fn from(duration: DisplayDuration) -> Self {
        if duration == DisplayDuration::SHORT {
            Repr::Preset(Preset::Short)
        } else if duration == DisplayDuration::LONG {
            Repr::Preset(Preset::Long)
        } else {
            Repr::Millis(u64::try_from(duration.0.as_millis()).unwrap_or(u64::MAX))
        }
    }
}
