// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Navbar entry: quiet text that lights up violet on hover.
pub fn nav(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::VIOLET_500,
        _ => palette::GRAY_200,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Primary call-to-action pill.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::STRONG,
            ..palette::VIOLET_500
        },
        button::Status::Pressed => Color {
            a: opacity::MEDIUM,
            ..palette::VIOLET_500
        },
        _ => palette::VIOLET_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Project card surface. The border lifts to violet while hovered, standing
/// in for the source design's scale effect.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::VIOLET_500,
        _ => palette::CARD_BORDER,
    };
    button::Style {
        background: Some(Background::Color(palette::SPACE_900)),
        text_color: palette::GRAY_200,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Footer/social text link.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::WHITE,
        _ => palette::GRAY_300,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
