// SPDX-License-Identifier: MPL-2.0
//! Ambient media band: the placeholder-then-video backdrop every section
//! with background video embeds.
//!
//! The band owns its player and load state exclusively. It polls the decode
//! worker on the animation tick, and the placeholder-to-media transition for
//! this band only ever follows this band's own ready signal — bands in
//! different sections load and swap independently.

use crate::media::ambient::AmbientPlayer;
use crate::media::load_state;
use crate::ui::components::placeholder;
use iced::widget::image::Handle;
use iced::widget::{Image, Stack};
use iced::{Color, ContentFit, Element, Length};
use std::time::{Duration, Instant};

/// Per-section ambient media state.
#[derive(Debug)]
pub struct AmbientBand {
    player: Option<AmbientPlayer>,
    load: load_state::State,
    frame: Option<Handle>,
    frame_seq: u64,
    tint: Color,
}

impl AmbientBand {
    /// Creates a band. `player` is `None` when ambient video is disabled;
    /// the band then pulses its placeholder forever.
    pub fn new(tint: Color, player: Option<AmbientPlayer>, fade: Duration) -> Self {
        Self {
            player,
            load: load_state::State::new(fade),
            frame: None,
            frame_seq: 0,
            tint,
        }
    }

    /// Observes the decode worker: pulls any newly published frame and feeds
    /// the ready signal into the load state.
    pub fn poll(&mut self, now: Instant) -> load_state::Effect {
        let Some(player) = &self.player else {
            return load_state::Effect::None;
        };

        let seq = player.frame_seq();
        if seq != self.frame_seq {
            if let Some(frame) = player.latest_frame() {
                self.frame = Some(Handle::from_rgba(
                    frame.width,
                    frame.height,
                    frame.rgba.as_ref().clone(),
                ));
                self.frame_seq = seq;
            }
        }

        if player.is_ready() && self.load.is_pending() {
            return self.load.handle(load_state::Message::MediaReady(now));
        }
        load_state::Effect::None
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.load.is_loaded()
    }

    #[must_use]
    pub fn load_state(&self) -> &load_state::State {
        &self.load
    }

    /// Fills the available box: pulsing gradient under the fading-in video.
    /// Both layers are always present during the cross-fade; only opacity
    /// changes, so the swap never reflows.
    pub fn view<'a, Message: 'a>(&'a self, now: Instant, elapsed: Duration) -> Element<'a, Message> {
        let placeholder_intensity =
            placeholder::pulse_intensity(elapsed) * self.load.placeholder_opacity(now);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(placeholder::view(self.tint, placeholder_intensity));

        let media_opacity = self.load.media_opacity(now);
        if media_opacity > 0.0 {
            if let Some(frame) = &self.frame {
                layers = layers.push(
                    Image::new(frame.clone())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .content_fit(ContentFit::Cover)
                        .opacity(media_opacity),
                );
            }
        }

        layers.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn band_without_player_stays_pending() {
        let mut band = AmbientBand::new(palette::TINT_SKILLS, None, Duration::from_millis(500));
        let effect = band.poll(Instant::now());
        assert_eq!(effect, load_state::Effect::None);
        assert!(!band.is_loaded());
        assert_eq!(band.load_state().placeholder_opacity(Instant::now()), 1.0);
    }
}
