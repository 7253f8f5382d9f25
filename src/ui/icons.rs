// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single-color SVGs embedded at compile time via `include_bytes!`
//! and tinted at render time. Handles are cached using `OnceLock` so each
//! asset is parsed once.

use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(
    check_circle,
    "check_circle.svg",
    "Check circle: shown on success snack bars."
);
define_icon!(
    error,
    "error.svg",
    "Exclamation circle: shown on error snack bars."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_cached() {
        assert_eq!(check_circle().id(), check_circle().id());
        assert_ne!(check_circle().id(), error().id());
    }
}
