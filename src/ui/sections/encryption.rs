// SPDX-License-Identifier: MPL-2.0
//! Encryption banner: lock glyphs over an ambient video band.

use crate::config::defaults::SECTION_MIN_HEIGHT;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::sections::ambient_band::AmbientBand;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{container, mouse_area, Column, Image, Row, Space, Stack, Text};
use iced::{Alignment, Element, Font, Length};
use std::time::{Duration, Instant};

/// Lock glyph dimensions, fixed so the stack never reflows while loading.
const LOCK_TOP_SIZE: f32 = 50.0;
const LOCK_MAIN_SIZE: f32 = 70.0;

/// Which lock glyph an image load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockSlot {
    Top,
    Main,
}

/// Encryption section state.
#[derive(Debug)]
pub struct State {
    pub ambient: AmbientBand,
    lock_top: Option<Handle>,
    lock_main: Option<Handle>,
    lock_hovered: bool,
}

/// Messages for the encryption section.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered or left the lock glyph group.
    LockHoverChanged(bool),
    /// A lock glyph finished loading.
    LockLoaded {
        slot: LockSlot,
        result: Result<ImageData, Error>,
    },
}

impl State {
    pub fn new(ambient: AmbientBand) -> Self {
        Self {
            ambient,
            lock_top: None,
            lock_main: None,
            lock_hovered: false,
        }
    }

    /// Handle an encryption message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::LockHoverChanged(hovered) => {
                self.lock_hovered = hovered;
            }
            Message::LockLoaded { slot, result } => match result {
                Ok(data) => {
                    let handle = Some(data.to_handle());
                    match slot {
                        LockSlot::Top => self.lock_top = handle,
                        LockSlot::Main => self.lock_main = handle,
                    }
                }
                Err(err) => {
                    tracing::warn!(?slot, error = %err, "lock glyph failed to load");
                }
            },
        }
    }

    pub fn poll(&mut self, now: Instant) {
        self.ambient.poll(now);
    }

    #[must_use]
    pub fn is_lock_hovered(&self) -> bool {
        self.lock_hovered
    }

    pub fn view<'a>(&'a self, now: Instant, elapsed: Duration) -> Element<'a, Message> {
        let title = Row::new()
            .spacing(spacing::SM)
            .push(
                Text::new("Performance")
                    .size(typography::HEADLINE)
                    .color(palette::WHITE),
            )
            .push(
                Text::new("&")
                    .size(typography::HEADLINE)
                    .color(palette::VIOLET_500),
            )
            .push(
                Text::new("security.")
                    .size(typography::HEADLINE)
                    .color(palette::WHITE),
            );

        // The shackle lifts away from the body while hovered.
        let lock_gap = if self.lock_hovered {
            spacing::LG
        } else {
            spacing::XS
        };
        let locks = mouse_area(
            Column::new()
                .align_x(Alignment::Center)
                .spacing(lock_gap)
                .push(lock_glyph(self.lock_top.as_ref(), LOCK_TOP_SIZE))
                .push(lock_glyph(self.lock_main.as_ref(), LOCK_MAIN_SIZE)),
        )
        .on_enter(Message::LockHoverChanged(true))
        .on_exit(Message::LockHoverChanged(false));

        let chip = container(Text::new("Encryption").size(typography::CAPTION))
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::welcome_chip);

        let tagline = Text::new("Secure your data with end-to-end encryption.")
            .size(typography::LEAD)
            .font(Font {
                style: iced::font::Style::Italic,
                ..Font::DEFAULT
            })
            .color(palette::GRAY_300);

        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(Alignment::Center)
            .push(title)
            .push(locks)
            .push(chip)
            .push(Space::new(Length::Shrink, Length::Fixed(spacing::XXL)))
            .push(tagline);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_MIN_HEIGHT))
            .push(self.ambient.view(now, elapsed))
            .push(
                container(content)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .into()
    }
}

fn lock_glyph<'a>(handle: Option<&Handle>, size: f32) -> Element<'a, Message> {
    let side = Length::Fixed(size);
    match handle {
        Some(handle) => Image::new(handle.clone()).width(side).height(side).into(),
        None => container(Space::new(side, side))
            .style(styles::container::icon_placeholder)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette as tokens;

    fn sample_state() -> State {
        State::new(AmbientBand::new(
            tokens::TINT_ENCRYPTION,
            None,
            Duration::from_millis(500),
        ))
    }

    #[test]
    fn hover_flag_follows_pointer() {
        let mut state = sample_state();
        assert!(!state.is_lock_hovered());
        state.handle(Message::LockHoverChanged(true));
        assert!(state.is_lock_hovered());
        state.handle(Message::LockHoverChanged(false));
        assert!(!state.is_lock_hovered());
    }

    #[test]
    fn lock_glyphs_fill_their_slots() {
        let mut state = sample_state();
        state.handle(Message::LockLoaded {
            slot: LockSlot::Main,
            result: Ok(ImageData::from_rgba(1, 1, vec![0_u8; 4])),
        });
        assert!(state.lock_main.is_some());
        assert!(state.lock_top.is_none());
    }

    #[test]
    fn failed_glyph_load_changes_nothing() {
        let mut state = sample_state();
        state.handle(Message::LockLoaded {
            slot: LockSlot::Top,
            result: Err(Error::Image("missing".into())),
        });
        assert!(state.lock_top.is_none());
        assert!(!state.is_lock_hovered());
    }
}
