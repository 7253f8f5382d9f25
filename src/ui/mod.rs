// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.

pub mod design_tokens;
pub mod fonts;
pub mod icons;
pub mod snack_bar;
