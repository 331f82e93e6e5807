// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Backing storage for a [`PieceTable`].
//!
//! - [`CharBuffer`] is a [`String`] that can be addressed by code point offsets in O(1).
//! - [`BufferPair`] holds the two buffers every document owns: the read-only
//!   `original` text and the append-only `addendum`.
//!
//! # Code point addressing
//!
//! [`Piece`]s count code points, but a [`String`] is indexed by bytes. For pure ASCII
//! text those are the same thing, so a [`CharBuffer`] keeps no extra data. As soon as
//! any non-ASCII text lands in the buffer, it builds a table holding the byte offset of
//! every char boundary (plus one trailing entry for the end of the text), and keeps it
//! up to date on every append.
//!
//! ```text
//! text:       "aé😀b"
//! bytes:      61 c3 a9 f0 9f 98 80 62
//! boundaries: [0, 1, 3, 7, 8]
//!              a  é  😀 b  end
//! ```
//!
//! Slicing `[start, start + length)` then becomes
//! `&text[boundaries[start]..boundaries[start + length]]`, which never splits a
//! multi-byte character and never copies.
//!
//! [`Piece`]: crate::Piece
//! [`PieceTable`]: crate::PieceTable

use crate::{CharIndex, CharLength, Piece, ch_index, ch_len};

/// A [`String`] addressed by code point offsets. Only grows at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    text: String,
    char_count: CharLength,
    /// Byte offset of every char boundary, followed by `text.len()`. Empty while the
    /// text is pure ASCII.
    boundaries: Vec<usize>,
}

impl CharBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(byte_capacity: usize) -> Self {
        Self {
            text: String::with_capacity(byte_capacity),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_text(text: String) -> Self {
        // Keep the caller's allocation for the common (ASCII) case.
        if text.is_ascii() {
            return Self {
                char_count: ch_len(text.len()),
                text,
                boundaries: Vec::new(),
            };
        }
        let mut it = Self::with_capacity(text.len());
        it.push_str(&text);
        it
    }

    #[must_use]
    pub fn len_chars(&self) -> CharLength { self.char_count }

    #[must_use]
    pub fn len_bytes(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Returns `true` while no non-ASCII text has been pushed.
    #[must_use]
    pub fn is_ascii(&self) -> bool { self.boundaries.is_empty() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    /// Append `text` to the end of the buffer. Returns the code point offset at which
    /// `text` starts, which is the length of the buffer before the append.
    pub fn push_str(&mut self, text: &str) -> CharIndex {
        let start = ch_index(self.char_count.as_usize());

        if text.is_empty() {
            return start;
        }

        if self.is_ascii() && text.is_ascii() {
            self.text.push_str(text);
            self.char_count += ch_len(text.len());
            return start;
        }

        // Switch from ASCII mode: every byte so far is its own char.
        if self.is_ascii() {
            self.boundaries = (0..=self.text.len()).collect();
        }

        // Drop the trailing end entry, it is re-added below.
        self.boundaries.pop();
        let base = self.text.len();
        self.boundaries
            .extend(text.char_indices().map(|(byte_offset, _)| base + byte_offset));
        self.text.push_str(text);
        self.boundaries.push(self.text.len());
        self.char_count = ch_len(self.boundaries.len() - 1);

        start
    }

    /// Byte offset of the char at `index`. `index == len_chars()` is allowed and maps to
    /// the end of the text.
    fn byte_offset(&self, index: CharIndex) -> Option<usize> {
        if self.is_ascii() {
            (index.as_usize() <= self.text.len()).then_some(index.as_usize())
        } else {
            self.boundaries.get(index.as_usize()).copied()
        }
    }

    /// Borrow the code points `[start, start + length)`. Returns [None] if the range
    /// runs past the end of the buffer.
    #[must_use]
    pub fn slice(&self, start: CharIndex, length: CharLength) -> Option<&str> {
        let byte_start = self.byte_offset(start)?;
        let byte_end = self.byte_offset(start + length)?;
        self.text.get(byte_start..byte_end)
    }

    #[must_use]
    pub fn char_at(&self, index: CharIndex) -> Option<char> {
        self.slice(index, ch_len(1))
            .and_then(|it| it.chars().next())
    }
}

/// Tags which buffer of a [`BufferPair`] a [`Piece`] points into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The text the document was created with.
    Original,
    /// Everything inserted or appended since.
    Addendum,
}

/// The two buffers owned by each [`PieceTable`]. `original` is fixed at construction,
/// `addendum` only ever grows, so pieces pointing into either one stay valid for the
/// life of the document.
///
/// [`PieceTable`]: crate::PieceTable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferPair {
    original: CharBuffer,
    addendum: CharBuffer,
}

impl BufferPair {
    #[must_use]
    pub fn new(original: String, addendum_byte_capacity: usize) -> Self {
        Self {
            original: CharBuffer::from_text(original),
            addendum: CharBuffer::with_capacity(addendum_byte_capacity),
        }
    }

    #[must_use]
    pub fn original(&self) -> &CharBuffer { &self.original }

    #[must_use]
    pub fn addendum(&self) -> &CharBuffer { &self.addendum }

    #[must_use]
    pub fn get(&self, kind: BufferKind) -> &CharBuffer {
        match kind {
            BufferKind::Original => &self.original,
            BufferKind::Addendum => &self.addendum,
        }
    }

    /// Push `text` onto the addendum. Returns where it starts in the addendum.
    pub fn append_to_addendum(&mut self, text: &str) -> CharIndex {
        self.addendum.push_str(text)
    }

    /// Borrow the slice of text that `piece` describes.
    #[must_use]
    pub fn resolve(&self, piece: &Piece) -> Option<&str> {
        self.get(piece.buffer()).slice(piece.start(), piece.length())
    }
}
