// SPDX-License-Identifier: MPL-2.0
//! `guest_gallery` is a small desktop gallery application built with the
//! Iced GUI framework.
//!
//! It shows a grid of guest portraits that open into a fullscreen lightbox,
//! with a permanent placeholder fallback for images that fail to load. It
//! demonstrates screen-based navigation, user preference management, and
//! modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
