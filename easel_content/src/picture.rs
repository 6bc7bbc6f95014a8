// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded image files.

use std::path::Path;

use easel_pixels::Pixmap;

use crate::LoadError;

/// Loads image files into [`Pixmap`]s.
///
/// Any format enabled through the crate features (`png`, `jpeg`, `bmp`) is
/// accepted; the format is sniffed from the bytes, not the file extension.
/// Decoded images are converted to straight-alpha RGBA8.
#[derive(Clone, Copy, Debug)]
pub struct Picture;

impl Picture {
    /// Reads and decodes the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Pixmap, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        decode(&bytes).map_err(|err| match err {
            LoadError::Decode { source, .. } => LoadError::Decode {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    /// Decodes an in-memory image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Pixmap, LoadError> {
        decode(bytes)
    }
}

fn decode(bytes: &[u8]) -> Result<Pixmap, LoadError> {
    let image = image::load_from_memory(bytes)
        .map_err(|source| LoadError::Decode { path: None, source })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, "decoded image");
    Pixmap::from_rgba8(width, height, image.into_raw()).map_err(|_| LoadError::Empty)
}
