// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Typography**: Font size scale
- **Radius**: Border radii

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all sections
2. Maintain ratios (e.g. MD = SM * 2)
3. Run validation tests
"#]

use iced::Color;

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{rgb, rgba};
    use iced::Color;

    // Backdrop
    /// Deep-space backdrop, `#030014`.
    pub const SPACE_950: Color = rgb(0.012, 0.0, 0.078);
    /// Slightly lifted surface used for cards.
    pub const SPACE_900: Color = rgb(0.035, 0.016, 0.125);

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = rgb(0.898, 0.906, 0.922);
    pub const GRAY_300: Color = rgb(0.82, 0.835, 0.86);
    pub const GRAY_500: Color = rgb(0.42, 0.45, 0.5);

    // Brand colors
    /// Primary violet accent.
    pub const VIOLET_500: Color = rgb(0.545, 0.361, 0.965);
    /// Violet chip border, `#7042F8` at reduced alpha.
    pub const VIOLET_BORDER: Color = rgba(0.439, 0.259, 0.973, 0.55);
    /// Cyan accent paired with the violet in headline spans.
    pub const CYAN_500: Color = rgb(0.024, 0.714, 0.831);
    /// Card outline, `#2A0E61`.
    pub const CARD_BORDER: Color = rgb(0.165, 0.055, 0.38);

    // Section tints for ambient placeholders
    pub const TINT_SKILLS: Color = rgb(0.12, 0.16, 0.55);
    pub const TINT_ENCRYPTION: Color = rgb(0.35, 0.1, 0.55);

    // Starfield
    pub const STAR: Color = rgb(0.91, 0.91, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const FAINT: f32 = 0.2;
    pub const AMBIENT: f32 = 0.3;
    pub const MEDIUM: f32 = 0.5;
    pub const STRONG: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical breathing room around full-bleed sections.
    pub const SECTION: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 16.0;
    pub const LEAD: f32 = 20.0;
    pub const TITLE: f32 = 30.0;
    pub const HEADLINE: f32 = 40.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const PILL: f32 = 999.0;
}

/// Parses a `#rrggbb` or `#rrggbbaa` hex string.
pub fn parse_hex(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f32> {
        u8::from_str_radix(digits.get(range)?, 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if digits.len() == 8 {
        channel(6..8)?
    } else {
        1.0
    };
    Some(Color { r, g, b, a })
}

/// Builds the application theme, honoring a configured backdrop override.
pub fn theme(theme_color: Option<&str>) -> iced::Theme {
    let background = theme_color
        .and_then(parse_hex)
        .unwrap_or(palette::SPACE_950);

    iced::Theme::custom(
        "astrofolio".to_string(),
        iced::theme::Palette {
            background,
            text: palette::GRAY_200,
            primary: palette::VIOLET_500,
            success: palette::SUCCESS_500,
            danger: palette::ERROR_500,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_accepts_rgb() {
        let color = parse_hex("#030014").expect("valid hex");
        assert!((color.r - 3.0 / 255.0).abs() < 0.001);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 20.0 / 255.0).abs() < 0.001);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parse_hex_accepts_rgba() {
        let color = parse_hex("7042F88B").expect("valid hex");
        assert!(color.a > 0.5 && color.a < 0.6);
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(parse_hex("#xyzxyz").is_none());
        assert!(parse_hex("#123").is_none());
        assert!(parse_hex("").is_none());
    }

    #[test]
    fn theme_falls_back_to_backdrop_token() {
        let theme = theme(Some("not-a-color"));
        assert_eq!(theme.palette().background, palette::SPACE_950);
    }

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }
}
