// SPDX-License-Identifier: MPL-2.0
//! Animated star background. This is the page's heaviest visual component;
//! the shell defers its construction until after startup (see
//! [`crate::ui::shell`]).

use crate::config::defaults::{
    STAR_MAX_RADIUS, STAR_MIN_RADIUS, STAR_ROTATION_RADS_PER_SEC, STAR_TWINKLE_RADS_PER_SEC,
};
use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Theme, Vector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// One star, positioned on the unit disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position in `[-1, 1]`.
    pub x: f32,
    /// Vertical position in `[-1, 1]`.
    pub y: f32,
    /// Radius in logical pixels.
    pub radius: f32,
    /// Twinkle phase offset in radians.
    pub twinkle: f32,
}

/// Scatters `count` stars uniformly over the unit disc. Deterministic for a
/// given seed so the field is stable across runs.
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let (x, y) = loop {
                let x: f32 = rng.gen_range(-1.0..1.0);
                let y: f32 = rng.gen_range(-1.0..1.0);
                if x * x + y * y <= 1.0 {
                    break (x, y);
                }
            };
            Star {
                x,
                y,
                radius: rng.gen_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS),
                twinkle: rng.gen_range(0.0..std::f32::consts::TAU),
            }
        })
        .collect()
}

/// The mounted starfield: geometry plus a draw cache invalidated once per
/// animation tick.
pub struct Starfield {
    stars: Vec<Star>,
    cache: canvas::Cache,
    rotation: f32,
    twinkle_clock: f32,
}

impl fmt::Debug for Starfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Starfield")
            .field("stars", &self.stars.len())
            .field("rotation", &self.rotation)
            .finish()
    }
}

impl Starfield {
    pub fn new(stars: Vec<Star>) -> Self {
        Self {
            stars,
            cache: canvas::Cache::new(),
            rotation: 0.0,
            twinkle_clock: 0.0,
        }
    }

    /// Advances the animation clock. With `animate` off the field stays at
    /// its initial pose and the cache is left warm.
    pub fn advance(&mut self, elapsed: Duration, animate: bool) {
        if !animate {
            return;
        }
        self.rotation = elapsed.as_secs_f32() * STAR_ROTATION_RADS_PER_SEC;
        self.twinkle_clock = elapsed.as_secs_f32() * STAR_TWINKLE_RADS_PER_SEC;
        self.cache.clear();
    }

    #[must_use]
    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

impl<Message> canvas::Program<Message> for Starfield {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            // Oversize the field so rotation never exposes a corner.
            let scale = bounds.width.max(bounds.height) * 0.85;

            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(self.rotation);

            for star in &self.stars {
                let alpha = 0.55 + 0.45 * (star.twinkle + self.twinkle_clock).sin();
                let color = Color {
                    a: alpha.clamp(0.0, 1.0),
                    ..palette::STAR
                };
                let path = canvas::Path::circle(
                    Point::new(star.x * scale, star.y * scale),
                    star.radius,
                );
                frame.fill(&path, color);
            }
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_is_deterministic_for_a_seed() {
        assert_eq!(generate(50, 7), generate(50, 7));
    }

    #[test]
    fn different_seeds_scatter_differently() {
        assert_ne!(generate(50, 7), generate(50, 8));
    }

    #[test]
    fn generate_produces_requested_count() {
        assert_eq!(generate(400, 1).len(), 400);
    }

    #[test]
    fn stars_stay_on_the_unit_disc() {
        for star in generate(200, 42) {
            assert!(star.x * star.x + star.y * star.y <= 1.0 + f32::EPSILON);
        }
    }

    #[test]
    fn star_radii_stay_within_bounds() {
        for star in generate(200, 42) {
            assert!(star.radius >= STAR_MIN_RADIUS);
            assert!(star.radius < STAR_MAX_RADIUS);
        }
    }

    #[test]
    fn advance_rotates_only_when_animated() {
        let mut field = Starfield::new(generate(10, 1));
        field.advance(Duration::from_secs(10), false);
        assert_eq!(field.rotation(), 0.0);
        field.advance(Duration::from_secs(10), true);
        assert!(field.rotation() > 0.0);
    }
}
