// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual objects: positioned, pixel-backed, possibly composite nodes.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use easel_pixels::Pixmap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::detect::collision;
use crate::types::{DetectorId, KeyEvent, ObjectId};

/// Callback invoked when the object is clicked.
pub type ClickHandler = Box<dyn FnMut(ObjectId)>;

/// Callback invoked for every key event delivered to the board.
pub type KeyHandler = Box<dyn FnMut(&KeyEvent)>;

/// A rectangular, positioned, pixel-backed node.
///
/// The pixel buffer defines the object's size; it is never empty. An optional
/// rotation is applied as a render transform sampled into a buffer of the same
/// size, so rotating never changes [`width`](Self::width) or
/// [`height`](Self::height).
///
/// Objects may own children (sub-objects). Children are positioned in
/// parent-local coordinates and rendered on top of the parent's content,
/// clipped to the parent rectangle.
///
/// The setters on this type only change state. Once an object has been
/// inserted into a [`Board`](crate::Board), mutate it through
/// [`Board::object_mut`](crate::Board::object_mut) so that repaints and
/// detectors are driven correctly.
pub struct VisualObject {
    x: i32,
    y: i32,
    source: Pixmap,
    /// Rotated copy of `source`; `None` when the angle is a whole turn.
    transformed: Option<Pixmap>,
    angle: i32,
    children: Vec<Self>,
    draggable: bool,
    pub(crate) attached: bool,
    pub(crate) detectors: SmallVec<[DetectorId; 2]>,
    pub(crate) on_click: Option<ClickHandler>,
    pub(crate) on_key: Option<KeyHandler>,
}

impl fmt::Debug for VisualObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualObject")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width())
            .field("height", &self.height())
            .field("angle", &self.angle)
            .field("children", &self.children)
            .field("draggable", &self.draggable)
            .field("attached", &self.attached)
            .field("detectors", &self.detectors)
            .field("on_click", &self.on_click.is_some())
            .field("on_key", &self.on_key.is_some())
            .finish_non_exhaustive()
    }
}

impl VisualObject {
    /// Creates a detached object at `(0, 0)` showing `content`.
    #[must_use]
    pub fn new(content: Pixmap) -> Self {
        Self {
            x: 0,
            y: 0,
            source: content,
            transformed: None,
            angle: 0,
            children: Vec::new(),
            draggable: false,
            attached: false,
            detectors: SmallVec::new(),
            on_click: None,
            on_key: None,
        }
    }

    /// Builder-style initial position.
    #[must_use]
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Left edge in board (or parent) coordinates.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Top edge in board (or parent) coordinates.
    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width of the pixel buffer.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.source.width()
    }

    /// Height of the pixel buffer.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.source.height()
    }

    /// Current rotation in degrees (clockwise).
    #[must_use]
    pub fn angle(&self) -> i32 {
        self.angle
    }

    /// Bounding rectangle in board (or parent) coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let x0 = f64::from(self.x);
        let y0 = f64::from(self.y);
        Rect::new(
            x0,
            y0,
            x0 + f64::from(self.width()),
            y0 + f64::from(self.height()),
        )
    }

    /// Returns `true` if the point lies inside the bounding rectangle.
    ///
    /// The rectangle is half-open: the right and bottom edges are outside.
    #[must_use]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (x0, y0) = (i64::from(self.x), i64::from(self.y));
        x >= x0 && x < x0 + i64::from(self.width()) && y >= y0 && y < y0 + i64::from(self.height())
    }

    /// Returns `true` while the object is in a board's z-order sequence.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Returns `true` if the board may drag this object with the pointer.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Detectors that are re-evaluated whenever this object changes.
    #[must_use]
    pub fn detectors(&self) -> &[DetectorId] {
        &self.detectors
    }

    /// The untransformed content.
    #[must_use]
    pub fn source(&self) -> &Pixmap {
        &self.source
    }

    /// The content with rotation applied, without children.
    #[must_use]
    pub fn transformed_image(&self) -> &Pixmap {
        self.transformed.as_ref().unwrap_or(&self.source)
    }

    /// Sub-objects in draw order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// The pixels this object shows on the board.
    ///
    /// Without children this borrows the transformed buffer. Otherwise a fresh
    /// buffer is composed: the transformed content, then each child's rendered
    /// image at its local offset, later children on top. Children are clipped
    /// to this object's rectangle.
    #[must_use]
    pub fn rendered_image(&self) -> Cow<'_, Pixmap> {
        let base = self.transformed_image();
        if self.children.is_empty() {
            return Cow::Borrowed(base);
        }
        let mut composed = base.clone();
        for child in &self.children {
            composed.draw(&child.rendered_image(), child.x, child.y);
        }
        Cow::Owned(composed)
    }

    /// Pixel-exact collision test against another object.
    ///
    /// Both objects are compared in the same coordinate space, so they must
    /// both be top-level objects of one board, or siblings.
    #[must_use]
    pub fn collides_with(&self, other: &Self) -> bool {
        collision::pixels_collide(self, other)
    }

    /// Sets the position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Sets the rotation in degrees and recomputes the transformed buffer.
    pub fn set_angle(&mut self, degrees: i32) {
        self.angle = degrees;
        self.apply_transform();
    }

    /// Replaces the content; the object takes the new buffer's size.
    pub fn set_content(&mut self, content: Pixmap) {
        self.source = content;
        self.apply_transform();
    }

    /// Appends a child and returns its index.
    pub fn add_subobject(&mut self, child: Self) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Removes and returns the child at `index`.
    pub fn remove_subobject(&mut self, index: usize) -> Option<Self> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Mutable access to a child.
    ///
    /// Children have no board of their own, so changing them only takes effect
    /// on screen once the parent is repainted.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    /// Allows the board to drag this object with the pointer.
    pub fn enable_drag(&mut self) {
        self.draggable = true;
    }

    /// Stops the board from dragging this object.
    pub fn disable_drag(&mut self) {
        self.draggable = false;
    }

    /// Installs the click callback, replacing any previous one.
    pub fn set_on_click(&mut self, handler: impl FnMut(ObjectId) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    /// Removes the click callback.
    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    /// Installs the key callback, replacing any previous one.
    pub fn set_on_key(&mut self, handler: impl FnMut(&KeyEvent) + 'static) {
        self.on_key = Some(Box::new(handler));
    }

    /// Removes the key callback.
    pub fn clear_on_key(&mut self) {
        self.on_key = None;
    }

    fn apply_transform(&mut self) {
        self.transformed = if self.angle.rem_euclid(360) == 0 {
            None
        } else {
            Some(self.source.rotated(self.angle))
        };
    }
}
