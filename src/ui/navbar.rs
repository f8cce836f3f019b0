// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: brand, section links, social links.

use crate::content::DisplayItem;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::shell::{SectionId, NAV_SECTIONS};
use crate::ui::styles;
use iced::widget::{button, container, Row, Space, Text};
use iced::{Element, Length};

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    /// Snap the shell scrollable to a section.
    GoTo(SectionId),
    /// Open a social link externally.
    OpenSocial(String),
}

/// Renders the navbar. Social entries without a link render as plain labels.
pub fn view<'a>(brand: &'a str, socials: &'a [DisplayItem]) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(iced::Alignment::Center)
        .push(
            Text::new(brand)
                .size(typography::LEAD)
                .color(palette::WHITE),
        )
        .push(Space::new(Length::Fill, Length::Shrink));

    for section in NAV_SECTIONS {
        row = row.push(
            button(Text::new(section.label()).size(typography::BODY))
                .style(styles::button::nav)
                .on_press(Message::GoTo(section)),
        );
    }

    row = row.push(Space::new(Length::Fixed(spacing::XL), Length::Shrink));

    for social in socials {
        let label = Text::new(social.name.as_str()).size(typography::BODY);
        row = row.push(match &social.link {
            Some(link) => Element::from(
                button(label)
                    .style(styles::button::link)
                    .on_press(Message::OpenSocial(link.clone())),
            ),
            None => Element::from(label),
        });
    }

    container(row)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XL])
        .style(styles::container::backdrop)
        .into()
}
