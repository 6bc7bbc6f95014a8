// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;
use std::path::{Path, PathBuf};

/// Error returned when content cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The bytes are not an image in a supported format.
    #[error("failed to decode image{}", describe(.path.as_deref()))]
    Decode {
        /// File the bytes came from, if any.
        path: Option<PathBuf>,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The image decoded to zero pixels.
    #[error("image has no pixels")]
    Empty,
    /// An animation was built without frames.
    #[error("animation needs at least one frame")]
    NoFrames,
}

fn describe(path: Option<&Path>) -> String {
    path.map(|path| format!(" {}", path.display()))
        .unwrap_or_default()
}
