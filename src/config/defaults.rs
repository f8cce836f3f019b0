// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Site**: Title, description, and theme color applied at shell construction
//! - **Window**: Default and minimum window geometry
//! - **Animation**: Tick rate, cross-fade, and placeholder pulse parameters
//! - **Starfield**: Deferred background geometry and motion
//! - **Frame Cache**: Decoded-frame caching for the looping ambient video
//! - **Layout**: Section heights and scroll anchors

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Site title shown in the window title bar and navbar brand.
pub const DEFAULT_SITE_TITLE: &str = "Astro Folio";

/// One-line site description.
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Fullstack developer portfolio with a taste for deep space";

/// Theme color as a hex string. Matches the backdrop behind every section.
pub const DEFAULT_THEME_COLOR: &str = "#030014";

/// Directory the image and video assets are resolved against.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 720.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks in milliseconds (~30 fps).
pub const TICK_INTERVAL_MS: u64 = 33;

/// Duration of the placeholder-to-media cross-fade in milliseconds.
pub const FADE_DURATION_MS: u64 = 500;

/// Period of the placeholder pulse in seconds.
pub const PULSE_PERIOD_SECS: f32 = 2.0;

/// Lowest intensity the placeholder pulse reaches.
pub const PULSE_MIN_INTENSITY: f32 = 0.35;

/// Highest intensity the placeholder pulse reaches.
pub const PULSE_MAX_INTENSITY: f32 = 0.9;

// ==========================================================================
// Starfield Defaults
// ==========================================================================

/// Number of stars in the deferred background.
pub const STAR_COUNT: usize = 400;

/// Seed for star scatter, so the field is stable across runs.
pub const STAR_SEED: u64 = 0x5742_1977;

/// Rotation speed of the field in radians per second.
pub const STAR_ROTATION_RADS_PER_SEC: f32 = 0.015;

/// Twinkle speed in radians per second.
pub const STAR_TWINKLE_RADS_PER_SEC: f32 = 1.2;

/// Smallest star radius in logical pixels.
pub const STAR_MIN_RADIUS: f32 = 0.4;

/// Largest star radius in logical pixels.
pub const STAR_MAX_RADIUS: f32 = 1.6;

// ==========================================================================
// Frame Cache Defaults
// ==========================================================================

/// Default decoded-frame cache size in MB.
pub const FRAME_CACHE_DEFAULT_MB: u32 = 256;

/// Minimum configurable frame cache size in MB.
pub const FRAME_CACHE_MIN_MB: u32 = 0;

/// Maximum configurable frame cache size in MB.
pub const FRAME_CACHE_MAX_MB: u32 = 1024;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum height of a full-bleed section in logical pixels.
pub const SECTION_MIN_HEIGHT: f32 = 720.0;

/// Scroll anchor of the skills section, as a fraction of scroll range.
pub const ANCHOR_SKILLS: f32 = 0.26;

/// Scroll anchor of the projects section, as a fraction of scroll range.
pub const ANCHOR_PROJECTS: f32 = 0.74;
