// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedurally drawn shapes.

use easel_pixels::Pixmap;
use peniko::Color;

/// A filled and/or outlined rectangle rendered into a [`Pixmap`].
///
/// Every setter returns the re-rendered buffer, ready to hand to
/// `ObjectMut::set_content`. With neither fill nor outline the buffer is fully
/// transparent.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    width: u32,
    height: u32,
    fill: Option<Color>,
    outline: Option<Color>,
    stroke_width: u32,
}

impl Shape {
    /// Default outline thickness in pixels.
    pub const DEFAULT_STROKE_WIDTH: u32 = 1;

    /// A `width` x `height` rectangle with no fill and no outline.
    #[must_use]
    pub fn rectangle(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fill: None,
            outline: None,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }

    /// Builder-style fill colour.
    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Builder-style outline colour.
    #[must_use]
    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }

    /// Builder-style outline thickness.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
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

    /// Fill colour, if any.
    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Outline colour, if any.
    #[must_use]
    pub fn outline(&self) -> Option<Color> {
        self.outline
    }

    /// Outline thickness in pixels.
    #[must_use]
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Resizes and re-renders.
    pub fn set_size(&mut self, width: u32, height: u32) -> Pixmap {
        self.width = width;
        self.height = height;
        self.render()
    }

    /// Changes the fill and re-renders.
    pub fn set_fill(&mut self, fill: Option<Color>) -> Pixmap {
        self.fill = fill;
        self.render()
    }

    /// Changes the outline and re-renders.
    pub fn set_outline(&mut self, outline: Option<Color>) -> Pixmap {
        self.outline = outline;
        self.render()
    }

    /// Changes the outline thickness and re-renders.
    pub fn set_stroke_width(&mut self, stroke_width: u32) -> Pixmap {
        self.stroke_width = stroke_width;
        self.render()
    }

    /// Draws the fill, then the outline on top of it.
    #[must_use]
    pub fn render(&self) -> Pixmap {
        let mut out = Pixmap::new(self.width, self.height);
        let (width, height) = (out.width(), out.height());
        if let Some(fill) = self.fill {
            out.fill(fill);
        }
        if let Some(outline) = self.outline {
            out.stroke_rect(0, 0, width, height, self.stroke_width, outline);
        }
        out
    }
}
