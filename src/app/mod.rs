// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the screens (home, guests) and
//! translates navigation events into screen switches. Policy decisions
//! (window sizing, configuration resolution, keyboard dismissal) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::ui::guests;
use iced::{window, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state bridging the navbar and the screens.
pub struct App {
    screen: Screen,
    guests: guests::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("guest_count", &self.guests.records().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 750;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let (guests, _task) = guests::State::new(guests::GalleryConfig::default());
        Self {
            screen: Screen::Home,
            guests,
        }
    }
}

impl App {
    /// Resolve the configuration, build the gallery, and kick off the
    /// image loads.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(Path::new(path)).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let mut gallery = guests::GalleryConfig::from(&config);
        if let Some(dir) = flags.assets_dir {
            gallery.assets_dir = dir.into();
        }

        let (guests, load_task) = guests::State::new(gallery);

        (
            Self {
                screen: Screen::Home,
                guests,
            },
            load_task.map(Message::Guests),
        )
    }

    pub fn title(&self) -> String {
        match self.screen {
            Screen::Home => "Honored Guests".to_string(),
            Screen::Guests => "Honored Guests - Gallery".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_home_with_default_gallery() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.guests.records().len(), 56);
    }

    #[test]
    fn title_follows_the_active_screen() {
        let mut app = App::default();
        assert_eq!(app.title(), "Honored Guests");

        app.screen = Screen::Guests;
        assert!(app.title().contains("Gallery"));
    }
}
