// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{App, Message};
use iced::keyboard::{self, key, Key};
use iced::Subscription;

impl App {
    /// Escape dismisses the lightbox from anywhere in the window; all
    /// other keys are left to the focused widget.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed {
                key: Key::Named(key::Named::Escape),
                ..
            } => Some(Message::EscapePressed),
            _ => None,
        })
    }
}
