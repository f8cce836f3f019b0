// SPDX-License-Identifier: MPL-2.0
//! One skill entry rendered as a fixed-size icon.

use crate::content::DisplayItem;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{container, tooltip, Image, Space, Text};
use iced::{Element, Length};

/// Renders a skill icon at the item's declared dimensions. Until the image
/// arrives (or if it never does), a same-size placeholder box keeps the row
/// layout stable.
pub fn view<'a, Message: 'a>(item: &'a DisplayItem, handle: Option<&Handle>) -> Element<'a, Message> {
    let width = Length::Fixed(item.width as f32);
    let height = Length::Fixed(item.height as f32);

    let visual: Element<'a, Message> = match handle {
        Some(handle) => Image::new(handle.clone())
            .width(width)
            .height(height)
            .into(),
        None => container(Space::new(width, height))
            .style(styles::container::icon_placeholder)
            .into(),
    };

    tooltip(
        visual,
        Text::new(item.name.as_str()).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .style(styles::container::welcome_chip)
    .into()
}
