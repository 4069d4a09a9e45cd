// SPDX-License-Identifier: MPL-2.0
//! Landing screen shown on startup.
//!
//! A minimal welcome view with the event title and a single call-to-action
//! leading into the guest gallery.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenGuests,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenGuests,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenGuests => Event::OpenGuests,
    }
}

/// Render the home screen.
pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("Our Honored Guests").size(typography::TITLE_LG);

    let subtitle = Text::new(
        "We are privileged to welcome a distinguished gathering of visionaries, \
         leaders, and pioneers who inspire and guide our journey.",
    )
    .size(typography::BODY_LG)
    .color(palette::GRAY_200)
    .align_x(alignment::Horizontal::Center);

    let open_button = button(Text::new("View the guests"))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenGuests);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(560.0)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_renders() {
        let _element = view();
    }

    #[test]
    fn open_guests_emits_event() {
        assert!(matches!(update(&Message::OpenGuests), Event::OpenGuests));
    }
}
