// SPDX-License-Identifier: MPL-2.0
//! Grid card for a single guest.

use super::component::Message;
use super::record::GuestRecord;
use crate::media::image::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Glyph shown in place of an image that failed to load.
pub const PLACEHOLDER_GLYPH: &str = "👤";

/// Render one clickable card: portrait (or fallback panel), and the
/// caption block only when the record carries a name or title.
pub fn view<'a>(
    record: &'a GuestRecord,
    data: Option<&'a ImageData>,
    failed: bool,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = if failed {
        fallback_panel(sizing::GLYPH_MD, true)
    } else if let Some(data) = data {
        image(data.handle.clone()).width(Length::Fill).into()
    } else {
        fallback_panel(sizing::GLYPH_MD, false)
    };

    let mut content = Column::new().width(Length::Fill).push(picture);
    if record.has_caption() {
        content = content.push(caption(record));
    }

    button(content)
        .padding(0.0)
        .width(Length::FillPortion(1))
        .style(styles::button::card)
        .on_press(Message::CardPressed(record.id))
        .into()
}

/// Neutral panel standing in for an image. The glyph only appears once a
/// load failure has been recorded, not while the image is still loading.
pub(super) fn fallback_panel<'a>(glyph_size: f32, show_glyph: bool) -> Element<'a, Message> {
    let glyph = if show_glyph { PLACEHOLDER_GLYPH } else { "" };

    Container::new(Text::new(glyph).size(glyph_size))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

/// Name/title strip under the portrait. Callers must only build this for
/// records where [`GuestRecord::has_caption`] holds.
fn caption(record: &GuestRecord) -> Element<'_, Message> {
    let mut block = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if !record.name.is_empty() {
        block = block.push(Text::new(record.name.as_str()).size(typography::BODY_LG));
    }
    if !record.title.is_empty() {
        block = block.push(Text::new(record.title.as_str()).size(typography::CAPTION));
    }

    Container::new(block)
        .width(Length::Fill)
        .style(styles::container::caption)
        .into()
}
