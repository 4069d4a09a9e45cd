// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{guests, home, navbar};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Guests(guests::Message),
    /// The Escape key was pressed anywhere in the window.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional directory containing the guest images.
    /// Takes precedence over the `assets_dir` configuration key.
    pub assets_dir: Option<String>,
    /// Optional path to a `settings.toml` to use instead of the platform
    /// config directory.
    pub config_path: Option<String>,
}
