// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::ui::snack_bar::DisplayDuration;

/// Default display duration when the config does not set one.
pub const DEFAULT_DURATION: DisplayDuration = DisplayDuration::SHORT;

/// Smallest font size accepted from the config file.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest font size accepted from the config file.
pub const MAX_FONT_SIZE: f32 = 40.0;

const _: () = {
    assert!(MIN_FONT_SIZE > 0.0);
    assert!(MAX_FONT_SIZE > MIN_FONT_SIZE);
};
