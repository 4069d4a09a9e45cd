// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The navbar renders one entry per screen and highlights the active one.
//! It is shown on every screen except while the lightbox layer is open.

use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenHome,
    OpenGuests,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenHome,
    OpenGuests,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenHome => Event::OpenHome,
        Message::OpenGuests => Event::OpenGuests,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let brand = Text::new("Honored Guests").size(typography::BODY_LG);

    let home_entry = nav_entry("Home", Message::OpenHome, ctx.active == Screen::Home);
    let guests_entry = nav_entry("Guests", Message::OpenGuests, ctx.active == Screen::Guests);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space().width(Length::Fill))
        .push(home_entry)
        .push(guests_entry);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Build a single navigation entry with active highlighting.
fn nav_entry<'a>(label: &'a str, message: Message, active: bool) -> Element<'a, Message> {
    let entry = button(Text::new(label).size(typography::BODY)).padding([spacing::XS, spacing::MD]);

    let entry = if active {
        entry.style(styles::button::nav_active)
    } else {
        entry.style(styles::button::nav_inactive).on_press(message)
    };

    entry.into()
}
