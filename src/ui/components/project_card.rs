// SPDX-License-Identifier: MPL-2.0
//! One project entry rendered as a clickable card.

use crate::content::DisplayItem;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, container, Column, Image, Space, Text};
use iced::{ContentFit, Element, Length};

/// Screenshot band height inside a card.
const IMAGE_HEIGHT: f32 = 180.0;

/// Renders a project card. Activation emits `on_open`; cards whose item has
/// no link render inert. The screenshot area keeps its footprint while the
/// image loads.
pub fn view<'a, Message: Clone + 'a>(
    item: &'a DisplayItem,
    screenshot: Option<&Handle>,
    on_open: Message,
) -> Element<'a, Message> {
    let image_band: Element<'a, Message> = match screenshot {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new(Length::Fill, Length::Fixed(IMAGE_HEIGHT)))
            .style(styles::container::icon_placeholder)
            .into(),
    };

    let title = Text::new(item.name.as_str())
        .size(typography::LEAD)
        .color(palette::WHITE);

    let body = Column::new()
        .spacing(spacing::MD)
        .push(image_band)
        .push(container(title).padding(spacing::MD));

    button(body)
        .width(Length::Fill)
        .padding(0.0)
        .style(styles::button::card)
        .on_press_maybe(item.link.as_ref().map(|_| on_open))
        .into()
}
