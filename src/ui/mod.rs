// SPDX-License-Identifier: MPL-2.0
//! UI modules: the shell, the sections it composes, and shared widgets,
//! styles, and design tokens.

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod sections;
pub mod shell;
pub mod styles;
