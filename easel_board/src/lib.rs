// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Board: a retained-mode board of pixel-backed visual objects.
//!
//! Easel Board keeps a z-ordered set of rectangular, positioned objects bound to
//! a host surface, and takes care of the bookkeeping a small 2D game or
//! interactive canvas needs:
//!
//! - Minimal repaint: every change requests a repaint of the union of the
//!   object's rectangle before and after the change, never the whole surface.
//! - Batching: [`Board::lock`] / [`Board::unlock`] collapse any number of
//!   changes into a single repaint of their union.
//! - Input routing: pointer events hit-test the top-most object, pointer drags
//!   move draggable objects, key events are broadcast.
//! - Detectors: pixel-exact [`CollisionDetector`] and distance-based
//!   [`ProximityDetector`] observe pairs of objects and call a listener.
//!
//! ## Where this fits
//!
//! The board does not own a window. The host implements [`RenderSink`] to
//! receive repaint requests and calls [`Board::paint`] (or
//! [`Board::paint_area`]) to draw the attached objects onto an
//! [`easel_pixels::Pixmap`]. Pointer and key events are forwarded from the
//! host's event loop to [`Board::pointer_press`], [`Board::pointer_drag`],
//! [`Board::pointer_release`], [`Board::pointer_click`], and
//! [`Board::key_event`].
//!
//! ## API overview
//!
//! - [`Board`]: the container. Owns every object, attached or detached.
//! - [`VisualObject`]: position, pixel content, rotation, children, callbacks.
//! - [`ObjectMut`]: the handle through which stored objects are changed.
//! - [`ObjectId`] / [`DetectorId`]: generational handles.
//! - [`Detector`]: trait for custom pairwise conditions.
//! - [`testing::RecordingSink`]: a sink that records requests.
//!
//! ## Minimal example
//!
//! ```
//! use easel_board::testing::RecordingSink;
//! use easel_board::{Board, VisualObject};
//! use easel_pixels::Pixmap;
//! use kurbo::Rect;
//! use peniko::Color;
//!
//! let mut board = Board::new(RecordingSink::new(200, 100));
//! let square = Pixmap::filled(10, 10, Color::from_rgba8(0, 0, 255, 255));
//! let id = board.add(VisualObject::new(square));
//! board.sink_mut().requests.clear();
//!
//! board.object_mut(id).unwrap().move_to(20, 0);
//!
//! // Old and new rectangles, as one request.
//! assert_eq!(board.sink().requests, vec![Rect::new(0.0, 0.0, 30.0, 10.0)]);
//! assert_eq!(board.object_at(25, 5), Some(id));
//! ```
//!
//! Changes to a detached object are never painted, but its detectors still run.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod board;
mod damage;
pub mod detect;
mod drag;
mod object;
mod scene;
mod sink;
pub mod testing;
mod types;

pub use board::{Board, ObjectMut};
pub use damage::Damage;
pub use detect::{CollisionDetector, Detector, DistanceMetric, PairListener, ProximityDetector};
pub use drag::DragState;
pub use object::{ClickHandler, KeyHandler, VisualObject};
pub use scene::Scene;
pub use sink::RenderSink;
pub use types::{DetectorId, KeyEvent, KeyState, ObjectId};
