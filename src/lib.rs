// SPDX-License-Identifier: MPL-2.0
//! `astrofolio` is an animated, space-themed portfolio application built with
//! the Iced GUI framework.
//!
//! It renders a fixed sequence of presentational sections (hero banner,
//! skills showcase, encryption banner, project cards) over a deferred-mounted
//! starfield background, with ambient looping video that fades in behind the
//! sections once decoded.

#![doc(html_root_url = "https://docs.rs/astrofolio/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
