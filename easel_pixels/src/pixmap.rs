// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Pixmap`] buffer type.

use alloc::vec;
use alloc::vec::Vec;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Affine, Point, Rect};
use peniko::Color;

use crate::blend::blend_over;

/// Error returned when a [`Pixmap`] cannot be built from raw data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PixmapError {
    /// One of the dimensions was zero.
    #[error("pixmap dimensions must be at least 1x1, got {width}x{height}")]
    ZeroSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The byte buffer does not hold exactly `width * height` RGBA8 pixels.
    #[error("expected {expected} bytes of RGBA8 data, got {actual}")]
    LengthMismatch {
        /// Number of bytes implied by the dimensions.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
}

/// A rectangular, straight-alpha RGBA8 pixel buffer.
///
/// Rows are stored top to bottom, four bytes per pixel in `R, G, B, A` order.
/// Width and height are always at least `1`.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Pixmap {
    /// Creates a fully transparent buffer.
    ///
    /// Zero dimensions are clamped to `1`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Creates a buffer filled with a single color.
    ///
    /// Zero dimensions are clamped to `1`.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(color);
        pixmap
    }

    /// Wraps raw RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PixmapError::ZeroSize`] if either dimension is zero and
    /// [`PixmapError::LengthMismatch`] if `data` is not `width * height * 4`
    /// bytes long.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixmapError> {
        if width == 0 || height == 0 {
            return Err(PixmapError::ZeroSize { width, height });
        }
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(PixmapError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its raw RGBA8 bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let px = &self.data[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Alpha of the pixel at `(x, y)`; `0` outside the buffer.
    #[must_use]
    pub fn alpha(&self, x: i32, y: i32) -> u8 {
        self.offset(x, y).map_or(0, |offset| self.data[offset + 3])
    }

    /// Overwrites the pixel at `(x, y)`.
    ///
    /// Returns `false` if the coordinate lies outside the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, rgba: [u8; 4]) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.data[offset..offset + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if every pixel has zero alpha.
    #[must_use]
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = to_rgba(color);
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Overwrites the pixels covered by the given rectangle with `color`.
    ///
    /// The rectangle is clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let rgba = to_rgba(color);
        let Some((x0, y0, x1, y1)) = self.clip_span(
            i64::from(x),
            i64::from(y),
            i64::from(x) + i64::from(width),
            i64::from(y) + i64::from(height),
        ) else {
            return;
        };
        for row in y0..y1 {
            for col in x0..x1 {
                let offset = (row * self.width as usize + col) * 4;
                self.data[offset..offset + 4].copy_from_slice(&rgba);
            }
        }
    }

    /// Overwrites a `stroke`-pixel wide border along the inside edge of the
    /// given rectangle.
    pub fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        stroke: u32,
        color: Color,
    ) {
        if stroke == 0 || width == 0 || height == 0 {
            return;
        }
        let stroke_w = stroke.min(width);
        let stroke_h = stroke.min(height);
        let right = x.saturating_add_unsigned(width - stroke_w);
        let bottom = y.saturating_add_unsigned(height - stroke_h);
        self.fill_rect(x, y, width, stroke_h, color);
        self.fill_rect(x, bottom, width, stroke_h, color);
        self.fill_rect(x, y, stroke_w, height, color);
        self.fill_rect(right, y, stroke_w, height, color);
    }

    /// Composites `src` over this buffer with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside this buffer are discarded.
    pub fn draw(&mut self, src: &Self, x: i32, y: i32) {
        let full = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.draw_clipped(src, x, y, full);
    }

    /// Composites `src` over this buffer at `(x, y)`, touching only pixels
    /// inside `clip` (in this buffer's coordinates).
    ///
    /// `clip` is expanded outwards to whole pixels.
    pub fn draw_clipped(&mut self, src: &Self, x: i32, y: i32, clip: Rect) {
        let clip = clip.expand();
        let x = i64::from(x);
        let y = i64::from(y);
        let Some((x0, y0, x1, y1)) = self.clip_span(
            x.max(to_i64(clip.x0)),
            y.max(to_i64(clip.y0)),
            (x + i64::from(src.width)).min(to_i64(clip.x1)),
            (y + i64::from(src.height)).min(to_i64(clip.y1)),
        ) else {
            return;
        };
        // Offsets of the clipped span inside `src`; both are non-negative.
        let (Some(src_x0), Some(src_y0)) = (span_offset(x0, x), span_offset(y0, y)) else {
            return;
        };
        let src_width = src.width as usize;
        for row in y0..y1 {
            let src_row = src_y0 + (row - y0);
            for col in x0..x1 {
                let src_col = src_x0 + (col - x0);
                let s = (src_row * src_width + src_col) * 4;
                let d = (row * self.width as usize + col) * 4;
                let src_px = [
                    src.data[s],
                    src.data[s + 1],
                    src.data[s + 2],
                    src.data[s + 3],
                ];
                if src_px[3] == 0 {
                    continue;
                }
                let dst_px = [
                    self.data[d],
                    self.data[d + 1],
                    self.data[d + 2],
                    self.data[d + 3],
                ];
                self.data[d..d + 4].copy_from_slice(&blend_over(dst_px, src_px));
            }
        }
    }

    /// Returns a copy rotated clockwise by `degrees` about the buffer center.
    ///
    /// The result has the same width and height; content that rotates outside
    /// the bounds is lost and uncovered pixels are transparent. Sampling is
    /// nearest-neighbour about the integer pivot `(width / 2, height / 2)`, so
    /// multiples of 90° are exact on even-sized square buffers; odd sizes
    /// shift by half a pixel and lose their last row and/or column.
    #[must_use]
    pub fn rotated(&self, degrees: i32) -> Self {
        if degrees.rem_euclid(360) == 0 {
            return self.clone();
        }
        // Integer center, matching where the pivot lands for odd sizes.
        let center = Point::new(f64::from(self.width / 2), f64::from(self.height / 2));
        let inverse = Affine::rotate_about(-f64::from(degrees).to_radians(), center);

        let mut out = Self::new(self.width, self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let sample = inverse * Point::new(f64::from(col) + 0.5, f64::from(row) + 0.5);
                let sx = to_i64(sample.x.floor());
                let sy = to_i64(sample.y.floor());
                let (Ok(sx), Ok(sy)) = (i32::try_from(sx), i32::try_from(sy)) else {
                    continue;
                };
                if let Some(px) = self.pixel(sx, sy) {
                    let d = (row as usize * self.width as usize + col as usize) * 4;
                    out.data[d..d + 4].copy_from_slice(&px);
                }
            }
        }
        out
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Clips a half-open span to the buffer, returning `None` when empty.
    fn clip_span(
        &self,
        x0: i64,
        y0: i64,
        x1: i64,
        y1: i64,
    ) -> Option<(usize, usize, usize, usize)> {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(i64::from(self.width));
        let y1 = y1.min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((
            usize::try_from(x0).ok()?,
            usize::try_from(y0).ok()?,
            usize::try_from(x1).ok()?,
            usize::try_from(y1).ok()?,
        ))
    }
}

/// Distance from `origin` to the clipped start `start`, as a buffer index.
fn span_offset(start: usize, origin: i64) -> Option<usize> {
    usize::try_from(i64::try_from(start).ok()? - origin).ok()
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn to_rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates are integral and well inside i64"
)]
fn to_i64(value: f64) -> i64 {
    value as i64
}
