// SPDX-License-Identifier: MPL-2.0
//! Styles for the lightbox overlay layer.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for the full-window backdrop behind the lightbox panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Style for the lightbox inner panel.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BORDER,
            ..palette::WHITE
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::BORDER_STRONG,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        ..container::Style::default()
    }
}
