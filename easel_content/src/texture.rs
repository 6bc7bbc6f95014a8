// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiled textures.

use std::path::Path;

use easel_pixels::Pixmap;

use crate::{LoadError, Picture};

/// Fills an area by repeating an image.
#[derive(Clone, Copy, Debug)]
pub struct Texture;

impl Texture {
    /// Repeats `tile` from the top-left corner until a `width` x `height`
    /// buffer is covered. Tiles on the right and bottom edges are cropped.
    #[must_use]
    pub fn tile(tile: &Pixmap, width: u32, height: u32) -> Pixmap {
        let mut out = Pixmap::new(width, height);
        let step_x = usize::try_from(tile.width()).unwrap_or(usize::MAX);
        let step_y = usize::try_from(tile.height()).unwrap_or(usize::MAX);
        for y in (0..i64::from(out.height())).step_by(step_y) {
            for x in (0..i64::from(out.width())).step_by(step_x) {
                if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                    out.draw(tile, x, y);
                }
            }
        }
        out
    }

    /// Loads the image at `path` and tiles it over `width` x `height`.
    pub fn open(path: impl AsRef<Path>, width: u32, height: u32) -> Result<Pixmap, LoadError> {
        Ok(Self::tile(&Picture::open(path)?, width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_repeat_and_crop() {
        let mut tile = Pixmap::new(2, 2);
        tile.set_pixel(0, 0, [1, 2, 3, 255]);

        let texture = Texture::tile(&tile, 5, 3);
        assert_eq!((texture.width(), texture.height()), (5, 3));
        for (x, y) in [(0, 0), (2, 0), (4, 0), (0, 2), (4, 2)] {
            assert_eq!(texture.pixel(x, y), Some([1, 2, 3, 255]), "at ({x}, {y})");
        }
        assert_eq!(texture.alpha(1, 0), 0);
        assert_eq!(texture.alpha(3, 1), 0);
    }

    #[test]
    fn tile_larger_than_area_is_cropped() {
        let data = vec![9, 9, 9, 255, 8, 8, 8, 255, 7, 7, 7, 255];
        let tile = Pixmap::from_rgba8(3, 1, data).unwrap();
        let texture = Texture::tile(&tile, 2, 1);
        assert_eq!(texture.data(), &[9, 9, 9, 255, 8, 8, 8, 255]);
    }
}
