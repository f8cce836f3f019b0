// SPDX-License-Identifier: MPL-2.0
//! Placeholder-to-media load state for one embedded media element.
//!
//! Each section that embeds ambient media owns one [`State`]. It starts
//! `Pending` (placeholder visible), transitions to `Loaded` exactly once when
//! the media's ready signal is observed, and never transitions back. The
//! visible swap is an opacity-only cross-fade; a ready signal that never
//! arrives leaves the placeholder up indefinitely.

use crate::config::defaults::FADE_DURATION_MS;
use std::time::{Duration, Instant};

/// Visible state of the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Placeholder is shown; the media has not signaled readiness.
    Pending,
    /// Media is shown (or fading in).
    Loaded,
}

/// Load state for one media element.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    loaded_at: Option<Instant>,
    fade: Duration,
}

/// Messages consumed by [`State::handle`].
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The media signaled readiness at the given instant.
    MediaReady(Instant),
}

/// Effects produced by load state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The element just transitioned to `Loaded`.
    BecameLoaded,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(FADE_DURATION_MS))
    }
}

impl State {
    /// Creates a pending state with the given cross-fade duration.
    pub fn new(fade: Duration) -> Self {
        Self {
            phase: Phase::Pending,
            loaded_at: None,
            fade,
        }
    }

    /// Creates a pending state that swaps without a fade.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Handle a load state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::MediaReady(at) => {
                if self.phase == Phase::Pending {
                    self.phase = Phase::Loaded;
                    self.loaded_at = Some(at);
                    Effect::BecameLoaded
                } else {
                    // Repeated ready signals have no further effect.
                    Effect::None
                }
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.phase == Phase::Loaded
    }

    /// Opacity of the media at `now`: 0 while pending, ramping to 1 over the
    /// fade duration once loaded.
    #[must_use]
    pub fn media_opacity(&self, now: Instant) -> f32 {
        match self.loaded_at {
            None => 0.0,
            Some(at) => {
                if self.fade.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(at).as_secs_f32();
                (elapsed / self.fade.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Opacity of the placeholder at `now`; complements the media opacity so
    /// the swap never shows a gap.
    #[must_use]
    pub fn placeholder_opacity(&self, now: Instant) -> f32 {
        1.0 - self.media_opacity(now)
    }

    /// Whether the cross-fade is still in progress at `now`.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.is_loaded() && self.media_opacity(now) < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(500);

    #[test]
    fn default_state_is_pending() {
        let state = State::default();
        assert!(state.is_pending());
        assert_eq!(state.phase(), Phase::Pending);
    }

    #[test]
    fn ready_signal_transitions_to_loaded() {
        let mut state = State::new(FADE);
        let effect = state.handle(Message::MediaReady(Instant::now()));
        assert_eq!(effect, Effect::BecameLoaded);
        assert!(state.is_loaded());
    }

    #[test]
    fn repeated_ready_signal_is_idempotent() {
        let mut state = State::new(FADE);
        let first = Instant::now();
        state.handle(Message::MediaReady(first));
        let opacity_before = state.media_opacity(first + FADE / 2);

        let effect = state.handle(Message::MediaReady(first + Duration::from_secs(5)));
        assert_eq!(effect, Effect::None);
        assert!(state.is_loaded());
        // The fade clock did not restart.
        assert_eq!(state.media_opacity(first + FADE / 2), opacity_before);
    }

    #[test]
    fn media_is_invisible_while_pending() {
        let state = State::new(FADE);
        assert_eq!(state.media_opacity(Instant::now()), 0.0);
        assert_eq!(state.placeholder_opacity(Instant::now()), 1.0);
    }

    #[test]
    fn fade_ramps_from_zero_to_one() {
        let mut state = State::new(FADE);
        let at = Instant::now();
        state.handle(Message::MediaReady(at));

        assert_eq!(state.media_opacity(at), 0.0);
        let mid = state.media_opacity(at + FADE / 2);
        assert!(mid > 0.4 && mid < 0.6, "unexpected midpoint {}", mid);
        assert_eq!(state.media_opacity(at + FADE), 1.0);
        assert_eq!(state.media_opacity(at + FADE * 4), 1.0);
    }

    #[test]
    fn placeholder_complements_media_during_fade() {
        let mut state = State::new(FADE);
        let at = Instant::now();
        state.handle(Message::MediaReady(at));
        let now = at + FADE / 4;
        let total = state.media_opacity(now) + state.placeholder_opacity(now);
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn instant_fade_is_fully_visible_immediately() {
        let mut state = State::instant();
        let at = Instant::now();
        state.handle(Message::MediaReady(at));
        assert_eq!(state.media_opacity(at), 1.0);
        assert!(!state.is_fading(at));
    }

    #[test]
    fn fading_window_is_bounded() {
        let mut state = State::new(FADE);
        let at = Instant::now();
        state.handle(Message::MediaReady(at));
        assert!(state.is_fading(at + FADE / 2));
        assert!(!state.is_fading(at + FADE * 2));
    }

    #[test]
    fn opacity_saturates_before_ready_instant() {
        let mut state = State::new(FADE);
        let at = Instant::now() + Duration::from_secs(1);
        state.handle(Message::MediaReady(at));
        // A tick observed just before the recorded instant must not underflow.
        assert_eq!(state.media_opacity(Instant::now()), 0.0);
    }
}
