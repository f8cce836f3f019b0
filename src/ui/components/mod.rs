// SPDX-License-Identifier: MPL-2.0
//! Reusable widgets shared by the sections.

pub mod placeholder;
pub mod project_card;
pub mod skill_icon;
pub mod starfield;
