// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox layer stacked over the grid.
//!
//! The layer is split into two independent hit zones with opposite
//! outcomes: the backdrop dismisses, the inner panel does not. The inner
//! `opaque` wrapper stops clicks at the panel boundary so they never reach
//! the backdrop's `mouse_area`.

use super::card;
use super::component::{Message, State};
use super::record::GuestRecord;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, image, mouse_area, opaque, stack, Column, Container, Row, Text,
};
use iced::{alignment, Element, Length};

/// Render the grid with the lightbox for `record` stacked on top.
pub(super) fn view<'a>(
    state: &'a State,
    record: &'a GuestRecord,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    // The enlarged image consults the same failure set as the grid card.
    let picture: Element<'a, Message> = if state.is_failed(record.id) {
        card::fallback_panel(sizing::GLYPH_LG, true)
    } else if let Some(data) = state.image(record.id) {
        image(data.handle.clone())
            .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_MAX_HEIGHT))
            .into()
    } else {
        card::fallback_panel(sizing::GLYPH_LG, false)
    };

    let close_button = button(
        Text::new("✕")
            .size(typography::BODY_LG)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::XXS)
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .style(styles::button::lightbox_close)
    .on_press(Message::CloseLightbox);

    let close_row = Row::new()
        .width(Length::Fill)
        .push(iced::widget::space().width(Length::Fill))
        .push(close_button);

    let panel_content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(close_row)
        .push(picture)
        .push(details(record));

    let panel = Container::new(panel_content)
        .max_width(sizing::PANEL_MAX_WIDTH)
        .padding(spacing::XL)
        .style(styles::overlay::panel);

    // Inner zone: opaque stops propagation at the panel boundary.
    // Outer zone: any click that reaches the backdrop dismisses.
    let layer = mouse_area(center(opaque(panel)).style(styles::overlay::backdrop))
        .on_press(Message::BackdropPressed);

    stack![base, opaque(layer)].into()
}

/// Guest details below the enlarged image.
fn details(record: &GuestRecord) -> Element<'_, Message> {
    let mut block = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::PANEL_MAX_WIDTH - 2.0 * spacing::XL)
        .align_x(alignment::Horizontal::Center);

    if !record.name.is_empty() {
        block = block.push(Text::new(record.name.as_str()).size(typography::TITLE_MD));
    }
    if !record.title.is_empty() {
        block = block.push(
            Text::new(record.title.as_str())
                .size(typography::BODY_LG)
                .color(palette::ACCENT_AMBER),
        );
    }

    block
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .color(palette::GRAY_200)
                .align_x(alignment::Horizontal::Center),
        )
        .into()
}
