// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};

/// Full-viewport backdrop. Matches the theme background so the deferred
/// starfield placeholder is indistinguishable from the page behind it.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        ..Default::default()
    }
}

/// Bordered translucent chip used for the "welcome" labels.
pub fn welcome_chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::FAINT,
            ..palette::VIOLET_500
        })),
        border: Border {
            color: palette::VIOLET_BORDER,
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::GRAY_200),
        ..Default::default()
    }
}

/// Surface behind a skill icon that has not loaded yet. Keeps the icon's
/// exact footprint so the row never reflows.
pub fn icon_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::FAINT,
            ..palette::GRAY_500
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Vertical gradient band shown while an ambient clip is pending: the
/// section tint pulsing into transparency. `intensity` multiplies the
/// gradient's alpha, carrying both the pulse and the cross-fade.
pub fn ambient_placeholder(tint: Color, intensity: f32) -> container::Style {
    let top = Color {
        a: opacity::AMBIENT * intensity,
        ..tint
    };
    let bottom = Color { a: 0.0, ..tint };

    let gradient = Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, top)
        .add_stop(1.0, bottom);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        ..Default::default()
    }
}

/// Footer bar, separated from the content by a hairline.
pub fn footer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().background)),
        border: Border {
            color: palette::CARD_BORDER,
            width: 1.0,
            ..Default::default()
        },
        ..Default::default()
    }
}
