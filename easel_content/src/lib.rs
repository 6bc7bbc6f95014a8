// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Content: pixel sources for Easel visual objects.
//!
//! Every visual object on an Easel board shows an [`easel_pixels::Pixmap`].
//! This crate produces those buffers:
//!
//! - [`Picture`]: decode an image file or in-memory bytes (PNG, JPEG, BMP,
//!   behind the `png`, `jpeg` and `bmp` features).
//! - [`Texture`]: repeat an image to fill an area.
//! - [`Shape`]: a rectangle with optional fill and outline.
//! - [`Animation`]: a cyclic frame sequence advanced by the host's timer.
//!
//! Sources are plain values; none of them hold a reference to a board. When a
//! source changes, hand the new buffer to the object with
//! `ObjectMut::set_content` so the board repaints it and re-runs its detectors.
//!
//! ## Minimal example
//!
//! ```
//! use easel_content::Shape;
//! use peniko::Color;
//!
//! let mut shape = Shape::rectangle(8, 4).with_fill(Color::from_rgba8(0, 128, 0, 255));
//! let pixmap = shape.render();
//! assert_eq!(pixmap.pixel(7, 3), Some([0, 128, 0, 255]));
//!
//! let wider = shape.set_size(16, 4);
//! assert_eq!(wider.width(), 16);
//! ```

mod animation;
mod error;
mod picture;
mod shape;
mod texture;

pub use animation::Animation;
pub use error::LoadError;
pub use picture::Picture;
pub use shape::Shape;
pub use texture::Texture;
