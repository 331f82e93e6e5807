// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Piece`] descriptors and the [`RelativePiece`] result of index resolution.
//!
//! # Gap positions vs character positions
//!
//! An insertion targets a *gap between characters*, while a deletion targets a
//! *character*. Given a piece that covers the document range `[from, from + length)`,
//! the two kinds of position classify differently:
//!
//! ```text
//!             from                      from + length
//!               ↓                             ↓
//!   gap:        |  a  |  b  |  c  |  d  |  e  |
//!               AtStart   ----Within----    AtEnd
//!
//!   char:          a     b     c     d     e
//!                First   ---Within---    Last
//! ```
//!
//! - [`RelativePiece::gap_position()`] returns an [`InsertPosition`], comparing against
//!   `from` and `from + length`.
//! - [`RelativePiece::char_position()`] returns a [`DeletePosition`], comparing against
//!   `from` and `from + length - 1`. A piece with a single character is
//!   [`DeletePosition::Only`], since it must be removed rather than shrunk.

use crate::{BufferKind, CharIndex, CharLength, ch_len};

/// Describes a contiguous run of characters in one of the two buffers of a
/// [`BufferPair`](crate::BufferPair).
///
/// A piece is never empty. Every constructor and every method that derives a new piece
/// returns [None] instead of producing one with zero length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    start: CharIndex,
    length: CharLength,
    buffer: BufferKind,
}

impl Piece {
    /// Returns [None] if `length` is zero.
    #[must_use]
    pub fn new(start: CharIndex, length: CharLength, buffer: BufferKind) -> Option<Self> {
        if length.is_zero() {
            return None;
        }
        Some(Self {
            start,
            length,
            buffer,
        })
    }

    #[must_use]
    pub fn start(&self) -> CharIndex { self.start }

    #[must_use]
    pub fn length(&self) -> CharLength { self.length }

    #[must_use]
    pub fn buffer(&self) -> BufferKind { self.buffer }

    /// One past the last buffer offset covered by this piece.
    #[must_use]
    pub fn end(&self) -> CharIndex { self.start + self.length }

    /// Split into `[start, start + at)` and `[start + at, start + length)`. Both halves
    /// keep the buffer tag.
    ///
    /// Returns [None] unless `at` is strictly inside the piece, since one of the halves
    /// would be empty.
    #[must_use]
    pub fn split_at(&self, at: CharLength) -> Option<(Piece, Piece)> {
        if at >= self.length {
            return None;
        }
        let before = Piece::new(self.start, at, self.buffer)?;
        let after = Piece::new(self.start + at, self.length - at, self.buffer)?;
        Some((before, after))
    }

    /// This piece without its first character. Returns [None] for a single character
    /// piece.
    #[must_use]
    pub fn shrink_front(&self) -> Option<Piece> {
        Piece::new(self.start + ch_len(1), self.length - ch_len(1), self.buffer)
    }

    /// This piece without its last character. Returns [None] for a single character
    /// piece.
    #[must_use]
    pub fn shrink_back(&self) -> Option<Piece> {
        Piece::new(self.start, self.length - ch_len(1), self.buffer)
    }
}

/// Where an insertion point falls relative to the piece that contains it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertPosition {
    /// Right before the first character. The new piece goes before this one.
    AtStart,
    /// Strictly inside. The piece is split at this local offset, and the new piece goes
    /// between the halves.
    Within(CharLength),
    /// Right after the last character. The new piece goes after this one.
    ///
    /// [`PieceTable::insert()`](crate::PieceTable::insert) never sees this: a gap after
    /// the last character of a piece resolves to the next piece (as
    /// [`AtStart`](Self::AtStart)), or to no piece at all at the end of the document.
    AtEnd,
}

/// Where the character targeted by a deletion falls inside its piece.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeletePosition {
    /// The piece is one character long. It is removed.
    Only,
    /// First character. The piece shrinks from the front.
    First,
    /// Strictly inside, at this local offset. The piece is split around it.
    Within(CharLength),
    /// Last character. The piece shrinks from the back.
    Last,
}

/// The result of index resolution: a piece together with the document offset it starts
/// at (`from`) and its position in the sequence (`index`). Never stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RelativePiece {
    pub from: CharIndex,
    pub index: usize,
    pub piece: Piece,
}

impl RelativePiece {
    /// Document offset one past this piece's last character.
    #[must_use]
    pub fn until(&self) -> CharIndex { self.from + self.piece.length() }

    /// Classify an insertion point against `[from, from + length]`.
    ///
    /// Returns [None] if `index` is not a gap of this piece.
    #[must_use]
    pub fn gap_position(&self, index: CharIndex) -> Option<InsertPosition> {
        let local = index.offset_from(self.from)?;
        if local.is_zero() {
            Some(InsertPosition::AtStart)
        } else if local < self.piece.length() {
            Some(InsertPosition::Within(local))
        } else if local == self.piece.length() {
            Some(InsertPosition::AtEnd)
        } else {
            None
        }
    }

    /// Classify a character position against `[from, from + length)`.
    ///
    /// Returns [None] if `index` is not a character of this piece.
    #[must_use]
    pub fn char_position(&self, index: CharIndex) -> Option<DeletePosition> {
        let local = index.offset_from(self.from)?;
        let length = self.piece.length();
        if local >= length {
            return None;
        }
        if length == ch_len(1) {
            Some(DeletePosition::Only)
        } else if local.is_zero() {
            Some(DeletePosition::First)
        } else if local == length - ch_len(1) {
            Some(DeletePosition::Last)
        } else {
            Some(DeletePosition::Within(local))
        }
    }
}
