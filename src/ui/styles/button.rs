// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(
    base: Color,
    hover: Color,
    edge: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (hover, shadow::MD),
            button::Status::Active | button::Status::Pressed => (base, shadow::NONE),
            button::Status::Disabled => (
                Color {
                    a: opacity::DISABLED,
                    ..base
                },
                shadow::NONE,
            ),
        };
        let text_color = if matches!(status, button::Status::Disabled) {
            Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            }
        } else {
            WHITE
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: edge,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Main action of a screen or modal (add, create, save).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
    )(theme, status)
}

/// Destructive action (delete).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ERROR_500, palette::ERROR_400, palette::ERROR_600)(theme, status)
}

/// Secondary action (cancel, refresh, edit).
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color, hover_bg) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_200)
    } else {
        (palette::GRAY_700, WHITE, Color::from_rgb(0.35, 0.35, 0.35))
    };

    let border = |color| Border {
        color,
        width: 1.0,
        radius: radius::SM.into(),
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg)),
            text_color,
            border: border(palette::PRIMARY_500),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: palette::GRAY_400,
            border: border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless button, used for toast dismissal.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |alpha| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Hovered => hover_fill(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_fill(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &button::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(background(&style), palette::PRIMARY_500);
    }

    #[test]
    fn danger_button_uses_error_colors() {
        let style = danger(&Theme::Light, button::Status::Hovered);
        assert_eq!(background(&style), palette::ERROR_400);
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert!(background(&style).a < 1.0);
    }

    #[test]
    fn secondary_adapts_to_theme() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn ghost_has_no_background_until_hovered() {
        assert!(ghost(&Theme::Dark, button::Status::Active)
            .background
            .is_none());
        assert!(ghost(&Theme::Dark, button::Status::Hovered)
            .background
            .is_some());
    }
}
