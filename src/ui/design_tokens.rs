// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.84, 0.88);

    // Brand colors (violet scale, matching the event branding)
    pub const PRIMARY_400: Color = Color::from_rgb(0.55, 0.4, 0.85);
    pub const PRIMARY_500: Color = Color::from_rgb(0.45, 0.3, 0.75);
    pub const PRIMARY_600: Color = Color::from_rgb(0.35, 0.22, 0.6);

    // Lightbox title accent
    pub const ACCENT_AMBER: Color = Color::from_rgb(0.984, 0.749, 0.141);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Card surface at rest.
    pub const CARD: f32 = 0.05;
    /// Card surface under the pointer.
    pub const CARD_HOVER: f32 = 0.08;
    /// Subtle hairline borders on translucent surfaces.
    pub const BORDER: f32 = 0.1;
    /// Stronger border used by the lightbox panel.
    pub const BORDER_STRONG: f32 = 0.2;
    /// Caption strip behind a card's name/title block.
    pub const CAPTION: f32 = 0.3;
    /// Placeholder panel behind the failure glyph.
    pub const PLACEHOLDER: f32 = 0.5;
    /// Lightbox backdrop; almost fully obscures the grid behind it.
    pub const BACKDROP: f32 = 0.95;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Minimum width of a grid card; drives the responsive column count.
    pub const CARD_MIN_WIDTH: f32 = 320.0;

    /// Fixed height of the neutral panel shown while an image is loading
    /// or after it has failed.
    pub const CARD_IMAGE_HEIGHT: f32 = 240.0;

    /// Failure glyph size inside a grid card.
    pub const GLYPH_MD: f32 = 32.0;

    /// Failure glyph size inside the lightbox.
    pub const GLYPH_LG: f32 = 48.0;

    /// Hit target of the lightbox close button.
    pub const CLOSE_BUTTON: f32 = 36.0;

    /// Maximum width of the lightbox inner panel.
    pub const PANEL_MAX_WIDTH: f32 = 640.0;

    /// Maximum height of the enlarged image inside the lightbox.
    pub const LIGHTBOX_IMAGE_MAX_HEIGHT: f32 = 460.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Display - Gallery page heading
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Lightbox guest name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Subtitles, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Card title strip, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - card outlines, panel hairlines
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CARD < opacity::CARD_HOVER);
    assert!(opacity::BORDER < opacity::BORDER_STRONG);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::GLYPH_LG > sizing::GLYPH_MD);
    assert!(sizing::PANEL_MAX_WIDTH > sizing::CARD_MIN_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
    assert!(radius::LG < radius::XL);
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
    fn backdrop_obscures_more_than_caption() {
        assert!(opacity::BACKDROP > opacity::CAPTION);
    }
}
