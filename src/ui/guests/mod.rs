// SPDX-License-Identifier: MPL-2.0
//! Guest gallery screen.
//!
//! The gallery is a responsive grid of guest cards that opens into a
//! fullscreen lightbox on click. Images that fail to load fall back to a
//! permanent placeholder for the rest of the session; the grid and the
//! lightbox consult the same failure set.

mod card;
mod component;
mod lightbox;
mod record;

pub use card::PLACEHOLDER_GLYPH;
pub use component::{Message, State};
pub use record::{GalleryConfig, GuestRecord, DEFAULT_DESCRIPTION};
