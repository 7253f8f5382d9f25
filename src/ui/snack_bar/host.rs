// SPDX-License-Identifier: MPL-2.0
//! Host containers snack bars are presented in.

use iced::Padding;

/// Identifies a host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostId(u64);

impl HostId {
    /// Creates a new unique host ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for HostId {
    fn default() -> Self {
        Self::new()
    }
}

/// A screen region snack bars are inserted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Host {
    pub id: HostId,
    /// Current width of the container.
    pub width: f32,
    /// Insets excluding system chrome; snack bars anchor to its bottom edge.
    pub safe_area: Padding,
}

impl Host {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            id: HostId::new(),
            width,
            safe_area: Padding::ZERO,
        }
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Padding) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_ids_are_unique() {
        assert_ne!(Host::new(100.0).id, Host::new(100.0).id);
    }

    #[test]
    fn default_safe_area_is_empty() {
        assert_eq!(Host::new(375.0).safe_area, Padding::ZERO);
    }
}
