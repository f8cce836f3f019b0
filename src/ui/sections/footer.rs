// SPDX-License-Identifier: MPL-2.0
//! Footer: link columns and the copyright line.

use crate::content::DisplayItem;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Alignment, Element, Length};

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open a footer link externally.
    LinkPressed(String),
}

pub fn view<'a>(title: &'a str, description: &'a str, socials: &'a [DisplayItem]) -> Element<'a, Message> {
    let mut social_column = Column::new()
        .spacing(spacing::SM)
        .push(heading("Social"));
    for social in socials {
        social_column = social_column.push(match &social.link {
            Some(link) => Element::from(
                button(Text::new(social.name.as_str()).size(typography::BODY))
                    .padding(0.0)
                    .style(styles::button::link)
                    .on_press(Message::LinkPressed(link.clone())),
            ),
            None => Element::from(Text::new(social.name.as_str()).size(typography::BODY)),
        });
    }

    let about_column = Column::new()
        .spacing(spacing::SM)
        .push(heading("About"))
        .push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::GRAY_300),
        );

    let columns = Row::new()
        .spacing(spacing::SECTION)
        .push(social_column)
        .push(about_column);

    let copyright = Text::new(format!(
        "© {} {}. All rights reserved.",
        title,
        chrono::Utc::now().year()
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_500);

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Alignment::Center)
        .push(columns)
        .push(copyright);

    container(content)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::footer)
        .into()
}

fn heading<'a>(label: &'a str) -> Text<'a> {
    Text::new(label).size(typography::LEAD).color(palette::WHITE)
}
