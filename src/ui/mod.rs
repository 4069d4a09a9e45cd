// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Landing screen with a call-to-action into the gallery
//! - [`guests`] - Guest gallery grid with lightbox viewing
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar shared by every screen
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod guests;
pub mod home;
pub mod navbar;
pub mod styles;
