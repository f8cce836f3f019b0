// SPDX-License-Identifier: MPL-2.0
//! Pulsing gradient placeholder shown while ambient media is pending.
//!
//! The placeholder occupies the exact box the media will occupy, so the
//! swap is opacity-only and never reflows the section.

use crate::config::defaults::{PULSE_MAX_INTENSITY, PULSE_MIN_INTENSITY, PULSE_PERIOD_SECS};
use crate::ui::styles;
use iced::widget::{container, Space};
use iced::{Color, Element, Length};
use std::time::Duration;

/// Pulse intensity at `elapsed` since the section mounted: a sine wave
/// between the configured bounds. With animations off, callers pass
/// `Duration::ZERO` and get a steady value.
pub fn pulse_intensity(elapsed: Duration) -> f32 {
    let phase = (elapsed.as_secs_f32() / PULSE_PERIOD_SECS) * std::f32::consts::TAU;
    let wave = 0.5 * (1.0 + phase.sin());
    PULSE_MIN_INTENSITY + (PULSE_MAX_INTENSITY - PULSE_MIN_INTENSITY) * wave
}

/// Fills the available box with the section tint pulsing into transparency.
/// `intensity` folds together the pulse and the cross-fade opacity.
pub fn view<'a, Message: 'a>(tint: Color, intensity: f32) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| styles::container::ambient_placeholder(tint, intensity))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_stays_within_bounds() {
        for millis in (0..5000).step_by(37) {
            let value = pulse_intensity(Duration::from_millis(millis));
            assert!(value >= PULSE_MIN_INTENSITY - f32::EPSILON);
            assert!(value <= PULSE_MAX_INTENSITY + f32::EPSILON);
        }
    }

    #[test]
    fn intensity_is_periodic() {
        let period = Duration::from_secs_f32(PULSE_PERIOD_SECS);
        let a = pulse_intensity(Duration::ZERO);
        let b = pulse_intensity(period);
        assert!((a - b).abs() < 0.001);
    }

    #[test]
    fn intensity_actually_varies() {
        let quarter = Duration::from_secs_f32(PULSE_PERIOD_SECS / 4.0);
        assert!((pulse_intensity(Duration::ZERO) - pulse_intensity(quarter)).abs() > 0.1);
    }
}
