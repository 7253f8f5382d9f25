// SPDX-License-Identifier: MPL-2.0
//! `snack_bar` provides transient, auto-dismissing notifications for
//! applications built with the Iced GUI framework.
//!
//! It ships the snack bar widget and its lifecycle manager, the design tokens
//! and font presets it is styled with, a TOML-backed style configuration, and
//! a small demo application.

#![doc(html_root_url = "https://docs.rs/snack_bar/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod paths;
pub mod ui;
