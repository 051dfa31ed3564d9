// SPDX-License-Identifier: MPL-2.0
//! Styles for the transport overlay drawn over the video surface.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Opaque backdrop standing in for the video surface.
#[must_use]
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Translucent bar behind the title and the scrubber.
#[must_use]
pub fn controls_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Round-ish transport button that darkens on hover and press.
pub fn transport_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Active => opacity::OVERLAY_STRONG,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ => WHITE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: 24.0.into(),
        },
        ..Default::default()
    }
}
