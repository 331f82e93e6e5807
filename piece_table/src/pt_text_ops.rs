// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reading the text of a [`PieceTable`] back out.
//!
//! [`PieceTable::chunks()`] borrows the slice of every piece, in document order, without
//! copying anything. [`PieceTable::materialize()`] and the [`Display`] impl (and so
//! `to_string()`) are built on top of it. None of these mutate the document.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{BufferPair, Piece, PieceTable};

/// Iterator over the text of each piece of a [`PieceTable`], in document order. Created
/// by [`PieceTable::chunks()`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    buffers: &'a BufferPair,
    pieces: std::slice::Iter<'a, Piece>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    /// Yields exactly one chunk per piece.
    ///
    /// # Panics
    ///
    /// In debug builds, if a piece runs past the end of its buffer. Edits never produce
    /// such a piece, see [`PieceTable::validate()`].
    fn next(&mut self) -> Option<Self::Item> {
        let buffers: &'a BufferPair = self.buffers;
        let piece = self.pieces.next()?;
        let chunk = buffers.resolve(piece);
        debug_assert!(chunk.is_some(), "{piece:?} runs past the end of its buffer");
        Some(chunk.unwrap_or_default())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.pieces.size_hint() }
}

impl ExactSizeIterator for Chunks<'_> {}

impl PieceTable {
    #[must_use]
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            buffers: &self.buffers,
            pieces: self.pieces.iter(),
        }
    }

    /// Copy the whole document into one [`String`]. Same as `to_string()`, but sizes the
    /// allocation up front.
    #[must_use]
    pub fn materialize(&self) -> String {
        let byte_len = self.chunks().map(str::len).sum();
        let mut acc = String::with_capacity(byte_len);
        self.chunks().for_each(|chunk| acc.push_str(chunk));
        acc
    }
}

impl Display for PieceTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for chunk in self.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
