// SPDX-License-Identifier: MPL-2.0
//! Hero banner: welcome chip, headline, tagline, call to action.

use crate::config::defaults::SECTION_MIN_HEIGHT;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Alignment, Element, Length};

/// Messages emitted by the hero section.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The call-to-action was activated; the shell snaps to the skills
    /// section.
    ExplorePressed,
}

pub fn view<'a>() -> Element<'a, Message> {
    let chip = container(Text::new("Fullstack Developer Portfolio").size(typography::CAPTION))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::welcome_chip);

    let headline = Column::new()
        .align_x(Alignment::Center)
        .push(
            Text::new("Providing")
                .size(typography::HEADLINE)
                .color(palette::WHITE),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    Text::new("the best")
                        .size(typography::HEADLINE)
                        .color(palette::VIOLET_500),
                )
                .push(
                    Text::new("project experience.")
                        .size(typography::HEADLINE)
                        .color(palette::CYAN_500),
                ),
        );

    let tagline = Text::new(
        "I'm a fullstack software engineer with experience across websites, \
         desktop applications, and everything in between.",
    )
    .size(typography::BODY)
    .color(palette::GRAY_300);

    let cta = button(Text::new("Learn more!").size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ExplorePressed);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .push(chip)
        .push(headline)
        .push(tagline)
        .push(cta);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(SECTION_MIN_HEIGHT))
        .into()
}
