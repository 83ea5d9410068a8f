// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use gallery_admin::ui::design_tokens::{opacity, palette, sizing, spacing};
    use gallery_admin::ui::styles::{button, container};
    use gallery_admin::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        for theme in [Theme::Dark, Theme::Light] {
            let status = iced::widget::button::Status::Active;
            let _ = button::primary(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::danger(&theme, status);
            let _ = button::ghost(&theme, status);
        }
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;
        let _ = container::card(&theme);
        let _ = container::modal(&theme);
        let _ = container::backdrop(&theme);
        let _ = container::thumbnail_placeholder(&theme);
        let _ = container::error_banner(&theme);
    }

    #[test]
    fn disabled_buttons_are_dimmed() {
        let theme = Theme::Dark;
        let active = button::primary(&theme, iced::widget::button::Status::Active);
        let disabled = button::primary(&theme, iced::widget::button::Status::Disabled);
        assert_ne!(active.text_color, disabled.text_color);
    }

    #[test]
    fn spacing_scale_is_ascending() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn opacity_values_are_normalized() {
        for value in [
            opacity::TRANSPARENT,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
            opacity::DISABLED,
            opacity::OPAQUE,
        ] {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn thumbnail_fits_inside_modal() {
        assert!(sizing::THUMBNAIL < sizing::MODAL_WIDTH);
        let _ = palette::PRIMARY_500;
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
    }
}
