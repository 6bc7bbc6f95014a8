// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Pixels: straight-alpha RGBA8 pixel buffers.
//!
//! This crate provides [`Pixmap`], the pixel buffer every Easel visual object
//! is backed by, together with the handful of raster operations the scene
//! board needs:
//!
//! - Per-pixel access, with alpha as the collision-relevant channel
//!   ([`Pixmap::alpha`] reads `0` outside the buffer).
//! - Source-over compositing of one buffer onto another with clipping
//!   ([`Pixmap::draw`], [`Pixmap::draw_clipped`]).
//! - Rotation about the buffer's own center into a buffer of the **same size**
//!   ([`Pixmap::rotated`]). Content rotated outside the bounds is cropped.
//! - Solid fills and rectangle outlines using [`peniko::Color`].
//!
//! A `Pixmap` is never empty: constructors clamp zero dimensions to `1`, and
//! the checked constructor [`Pixmap::from_rgba8`] reports mismatched input as a
//! [`PixmapError`].
//!
//! ## Minimal example
//!
//! ```
//! use easel_pixels::Pixmap;
//! use peniko::Color;
//!
//! let mut surface = Pixmap::new(4, 4);
//! let sprite = Pixmap::filled(2, 2, Color::from_rgba8(255, 0, 0, 255));
//!
//! surface.draw(&sprite, 1, 1);
//!
//! assert_eq!(surface.alpha(0, 0), 0);
//! assert_eq!(surface.pixel(1, 1), Some([255, 0, 0, 255]));
//! assert_eq!(surface.alpha(3, 3), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or the `libm` feature for floating point support in Kurbo and Peniko.

#![no_std]

extern crate alloc;

mod blend;
mod pixmap;

pub use blend::blend_over;
pub use pixmap::{Pixmap, PixmapError};
