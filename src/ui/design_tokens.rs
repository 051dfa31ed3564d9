// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the player screen.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay alpha levels
//! - **Spacing**: 8px grid
//! - **Sizing**: control sizes
//! - **Typography**: font size scale
//!
//! ```
//! use iced_reel::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(scrim.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    pub const BUTTON_HEIGHT: f32 = 48.0;

    /// Fixed width keeps the slider from jittering as the label changes.
    pub const TIME_LABEL_WIDTH: f32 = 96.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER < opacity::OVERLAY_PRESSED);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::BUTTON_HEIGHT > sizing::ICON_LG);
    assert!(typography::TITLE_MD > typography::BODY);
};
