// SPDX-License-Identifier: MPL-2.0
//! Media loading for the gallery.

pub mod image;

pub use image::{load_image, ImageData};
