// SPDX-License-Identifier: MPL-2.0
//! Skills showcase: three rows of skill icons over an ambient video band.

use crate::content::Registry;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::components::skill_icon;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::sections::ambient_band::AmbientBand;
use crate::ui::styles;
use crate::config::defaults::SECTION_MIN_HEIGHT;
use iced::widget::image::Handle;
use iced::widget::{container, Column, Row, Stack, Text};
use iced::{Alignment, Element, Length};
use std::time::{Duration, Instant};

/// Skills section state: the ambient band plus one icon slot per item.
#[derive(Debug)]
pub struct State {
    pub ambient: AmbientBand,
    icons: Vec<Vec<Option<Handle>>>,
}

/// Messages for the skills section.
#[derive(Debug, Clone)]
pub enum Message {
    /// An icon finished loading (or failed; the slot then stays empty).
    IconLoaded {
        category: usize,
        index: usize,
        result: Result<ImageData, Error>,
    },
}

impl State {
    pub fn new(registry: &Registry, ambient: AmbientBand) -> Self {
        let icons = registry
            .skills
            .iter()
            .map(|category| vec![None; category.items.len()])
            .collect();
        Self { ambient, icons }
    }

    /// Handle a skills message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::IconLoaded {
                category,
                index,
                result,
            } => match result {
                Ok(data) => {
                    if let Some(slot) = self
                        .icons
                        .get_mut(category)
                        .and_then(|row| row.get_mut(index))
                    {
                        *slot = Some(data.to_handle());
                    }
                }
                Err(err) => {
                    tracing::warn!(category, index, error = %err, "skill icon failed to load");
                }
            },
        }
    }

    pub fn poll(&mut self, now: Instant) {
        self.ambient.poll(now);
    }

    #[must_use]
    pub fn icon(&self, category: usize, index: usize) -> Option<&Handle> {
        self.icons.get(category)?.get(index)?.as_ref()
    }

    pub fn view<'a>(
        &'a self,
        registry: &'a Registry,
        now: Instant,
        elapsed: Duration,
    ) -> Element<'a, Message> {
        let header = Column::new()
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .push(
                container(Text::new("Think better with modern tools").size(typography::CAPTION))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::welcome_chip),
            )
            .push(
                Text::new("Making apps with modern technologies")
                    .size(typography::TITLE)
                    .color(palette::WHITE),
            )
            .push(
                Text::new("Never miss a task, deadline or idea")
                    .size(typography::LEAD)
                    .color(palette::GRAY_500),
            );

        let mut rows = Column::new()
            .spacing(spacing::LG)
            .align_x(Alignment::Center);
        for (category_index, category) in registry.skills.iter().enumerate() {
            let mut row = Row::new()
                .spacing(spacing::LG)
                .align_y(Alignment::Center);
            for (item_index, item) in category.items.iter().enumerate() {
                row = row.push(skill_icon::view(
                    item,
                    self.icon(category_index, item_index),
                ));
            }
            rows = rows.push(row);
        }

        let content = Column::new()
            .spacing(spacing::XL)
            .align_x(Alignment::Center)
            .push(header)
            .push(rows);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette as tokens;

    fn sample_state() -> (Registry, State) {
        let registry = Registry::builtin();
        let ambient = AmbientBand::new(tokens::TINT_SKILLS, None, Duration::from_millis(500));
        let state = State::new(&registry, ambient);
        (registry, state)
    }

    fn sample_icon() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0_u8; 16])
    }

    #[test]
    fn state_has_one_slot_per_registry_item() {
        let (registry, state) = sample_state();
        assert_eq!(state.icons.len(), registry.skills.len());
        for (category, row) in registry.skills.iter().zip(&state.icons) {
            assert_eq!(row.len(), category.items.len());
            assert!(row.iter().all(Option::is_none));
        }
    }

    #[test]
    fn loaded_icon_fills_its_slot_only() {
        let (_, mut state) = sample_state();
        state.handle(Message::IconLoaded {
            category: 1,
            index: 2,
            result: Ok(sample_icon()),
        });
        assert!(state.icon(1, 2).is_some());
        assert!(state.icon(1, 1).is_none());
        assert!(state.icon(0, 2).is_none());
    }

    #[test]
    fn failed_icon_leaves_slot_empty() {
        let (_, mut state) = sample_state();
        state.handle(Message::IconLoaded {
            category: 0,
            index: 0,
            result: Err(Error::Image("corrupt".into())),
        });
        assert!(state.icon(0, 0).is_none());
    }

    #[test]
    fn out_of_range_load_is_ignored() {
        let (_, mut state) = sample_state();
        state.handle(Message::IconLoaded {
            category: 9,
            index: 9,
            result: Ok(sample_icon()),
        });
        // No panic, no state change.
        assert!(state.icons.iter().flatten().all(Option::is_none));
    }
}
