// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay and surface levels
//! - **Spacing**: 8px grid
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use gallery_admin::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    pub const ERROR_400: Color = Color::from_rgb(0.95, 0.4, 0.38);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_600: Color = Color::from_rgb(0.78, 0.16, 0.15);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Disabled controls.
    pub const DISABLED: f32 = 0.45;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Preview square shown next to each gallery row.
    pub const THUMBNAIL: f32 = 96.0;
    pub const MODAL_WIDTH: f32 = 460.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Screen heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Modal headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Row titles.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Timestamps and field errors.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::MODAL_WIDTH < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn thumbnail_fits_inside_modal() {
        assert!(sizing::THUMBNAIL * 2.0 < sizing::MODAL_WIDTH);
    }
}
