// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle and event types: object/detector identifiers and key events.

/// Generational slot key shared by the typed identifiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Key {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

impl Key {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self { idx, generation }
    }

    pub(crate) const fn idx(self) -> usize {
        self.idx as usize
    }
}

/// Identifier for a visual object stored in a [`Board`](crate::Board).
///
/// This is a small, copyable handle that stays stable while the object lives in
/// the board, whether or not it is currently attached (drawn and hit-tested).
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On [`Board::insert`](crate::Board::insert), a fresh slot is allocated with generation `1`.
/// - On [`Board::take`](crate::Board::take), the slot is freed; any existing `ObjectId`
///   that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ObjectId`.
///
/// Stale `ObjectId`s never alias a different live object because the generation must match.
/// Every board operation treats a stale id as "not present".
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObjectId(pub(crate) Key);

/// Identifier for a detector registered with a [`Board`](crate::Board).
///
/// Same generational semantics as [`ObjectId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DetectorId(pub(crate) Key);

/// Whether a key went down, came up, or produced a character.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyState {
    /// The key was pressed.
    Pressed,
    /// The key was released.
    Released,
    /// The key press produced a character.
    Typed,
}

/// A keyboard event delivered by the host.
///
/// Key events are broadcast: the board's listener and every attached object
/// receive each one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct KeyEvent {
    /// Host-defined key code.
    pub code: u32,
    /// Transition that produced this event.
    pub state: KeyState,
    /// Character produced by the key, if any.
    pub text: Option<char>,
}

impl KeyEvent {
    /// A press of `code` without associated text.
    #[must_use]
    pub const fn pressed(code: u32) -> Self {
        Self {
            code,
            state: KeyState::Pressed,
            text: None,
        }
    }

    /// A release of `code` without associated text.
    #[must_use]
    pub const fn released(code: u32) -> Self {
        Self {
            code,
            state: KeyState::Released,
            text: None,
        }
    }

    /// A character typed with `code`.
    #[must_use]
    pub const fn typed(code: u32, text: char) -> Self {
        Self {
            code,
            state: KeyState::Typed,
            text: Some(text),
        }
    }
}
