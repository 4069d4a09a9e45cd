// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen below the shared navigation bar. While the
//! lightbox layer is open the navbar is hidden so the overlay owns the
//! whole window, mirroring how fullscreen media usually behaves.

use super::{App, Message, Screen};
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use iced::widget::{Column, Container};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.screen == Screen::Guests && self.guests.lightbox_open() {
            return self.guests.view().map(Message::Guests);
        }

        let navbar = navbar::view(NavbarViewContext {
            active: self.screen,
        })
        .map(Message::Navbar);

        let content: Element<'_, Message> = match self.screen {
            Screen::Home => home::view().map(Message::Home),
            Screen::Guests => self.guests.view().map(Message::Guests),
        };

        Column::new()
            .push(navbar)
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .into()
    }
}
