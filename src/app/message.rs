// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::snack_bar::{self, IconKind};
use iced::Size;
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "Show" button was pressed.
    ShowPressed,
    /// The snack bar action was pressed.
    Undo,
    SnackBar(snack_bar::Message),
    WindowResized(Size),
}

/// Which style the demo presents snack bars with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// The configured style.
    #[default]
    Default,
    /// A loud variant supplied through its own style sheet.
    App,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "app" => Ok(Variant::App),
            other => Err(format!("unknown variant: {other}")),
        }
    }
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Explicit config file; the default location is used otherwise.
    pub config_path: Option<PathBuf>,
    /// Title of the action button, if any.
    pub action: Option<String>,
    pub icon: IconKind,
    /// Use the long display duration instead of the configured one.
    pub long: bool,
    pub variant: Variant,
}
