// SPDX-License-Identifier: MPL-2.0
//! Update logic and message routing for the application.

use super::{App, Message, Screen};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => {
                match navbar::update(msg) {
                    NavbarEvent::OpenHome => self.screen = Screen::Home,
                    NavbarEvent::OpenGuests => self.screen = Screen::Guests,
                }
                Task::none()
            }
            Message::Home(msg) => {
                match home::update(&msg) {
                    HomeEvent::OpenGuests => self.screen = Screen::Guests,
                }
                Task::none()
            }
            Message::Guests(msg) => self.guests.update(msg).map(Message::Guests),
            Message::EscapePressed => {
                // Escape only ever dismisses the lightbox; it does not
                // navigate between screens.
                self.guests.close_lightbox();
                Task::none()
            }
        }
    }
}
