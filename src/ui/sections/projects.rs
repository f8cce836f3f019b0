// SPDX-License-Identifier: MPL-2.0
//! Project cards: one clickable card per registry project.

use crate::content::Registry;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::components::project_card;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{container, Column, Row, Text};
use iced::{Alignment, Element, Length};

/// Cards per grid row.
const CARDS_PER_ROW: usize = 3;

/// Projects section state: one screenshot slot per card.
#[derive(Debug, Default)]
pub struct State {
    shots: Vec<Option<Handle>>,
}

/// Messages for the projects section.
#[derive(Debug, Clone)]
pub enum Message {
    /// A screenshot finished loading.
    ShotLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// A card was activated.
    CardActivated(usize),
}

/// Effects produced by the projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Open the given project's link externally.
    Activated(usize),
}

impl State {
    pub fn new(registry: &Registry) -> Self {
        Self {
            shots: vec![None; registry.projects.len()],
        }
    }

    /// Handle a projects message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ShotLoaded { index, result } => {
                match result {
                    Ok(data) => {
                        if let Some(slot) = self.shots.get_mut(index) {
                            *slot = Some(data.to_handle());
                        }
                    }
                    Err(err) => {
                        tracing::warn!(index, error = %err, "project screenshot failed to load");
                    }
                }
                Effect::None
            }
            Message::CardActivated(index) => Effect::Activated(index),
        }
    }

    #[must_use]
    pub fn shot(&self, index: usize) -> Option<&Handle> {
        self.shots.get(index)?.as_ref()
    }

    pub fn view<'a>(&'a self, registry: &'a Registry) -> Element<'a, Message> {
        let title = Text::new("My Projects")
            .size(typography::TITLE)
            .color(palette::VIOLET_500);

        let mut grid = Column::new()
            .spacing(spacing::LG)
            .align_x(Alignment::Center);
        for (row_index, chunk) in registry.projects.chunks(CARDS_PER_ROW).enumerate() {
            let mut row = Row::new().spacing(spacing::LG);
            for (column_index, item) in chunk.iter().enumerate() {
                let index = row_index * CARDS_PER_ROW + column_index;
                row = row.push(project_card::view(
                    item,
                    self.shot(index),
                    Message::CardActivated(index),
                ));
            }
            grid = grid.push(row);
        }

        let content = Column::new()
            .spacing(spacing::XL)
            .align_x(Alignment::Center)
            .push(title)
            .push(grid);

        container(content)
            .center_x(Length::Fill)
            .padding([spacing::SECTION, spacing::XL])
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> (Registry, State) {
        let registry = Registry::builtin();
        let state = State::new(&registry);
        (registry, state)
    }

    #[test]
    fn state_has_one_slot_per_project() {
        let (registry, state) = sample_state();
        assert_eq!(state.shots.len(), registry.projects.len());
    }

    #[test]
    fn card_activation_reports_the_index() {
        let (_, mut state) = sample_state();
        let effect = state.handle(Message::CardActivated(2));
        assert_eq!(effect, Effect::Activated(2));
        // Activation leaves the visible state untouched.
        assert!(state.shots.iter().all(Option::is_none));
    }

    #[test]
    fn screenshot_fills_only_its_slot() {
        let (_, mut state) = sample_state();
        state.handle(Message::ShotLoaded {
            index: 1,
            result: Ok(ImageData::from_rgba(1, 1, vec![0_u8; 4])),
        });
        assert!(state.shot(1).is_some());
        assert!(state.shot(0).is_none());
    }

    #[test]
    fn failed_screenshot_leaves_placeholder() {
        let (_, mut state) = sample_state();
        let effect = state.handle(Message::ShotLoaded {
            index: 0,
            result: Err(Error::Image("missing".into())),
        });
        assert_eq!(effect, Effect::None);
        assert!(state.shot(0).is_none());
    }
}
