// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of one gallery row.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dialog body drawn above the backdrop.
pub fn modal(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed layer behind an open modal.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Square shown while a preview is loading or unavailable.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline banner shown when the list could not be loaded.
#[must_use]
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        match backdrop(&Theme::Light).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn error_banner_uses_error_border() {
        assert_eq!(error_banner(&Theme::Dark).border.color, palette::ERROR_500);
    }
}
