// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ordered list of [`Piece`]s that describes a document.
//!
//! Concatenating the slice of every piece, in order, reproduces the document text. The
//! sequence keeps a running total of piece lengths, so the document length is O(1),
//! while [`PieceSequence::resolve()`] is a linear scan over the pieces. There is no
//! normalization pass: adjacent pieces that happen to be contiguous in the same buffer
//! are left as they are.

use smallvec::SmallVec;

use crate::{CharIndex, CharLength, Piece, RelativePiece, ch_len};

/// Up to three pieces that take the place of one piece during an edit (eg: the two
/// halves of a split piece with a new piece in between).
pub type ReplacementPieces = SmallVec<[Piece; 3]>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSequence {
    pieces: Vec<Piece>,
    total_length: CharLength,
}

impl PieceSequence {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_capacity(piece_capacity: usize) -> Self {
        Self {
            pieces: Vec::with_capacity(piece_capacity),
            total_length: ch_len(0),
        }
    }

    /// Sum of the lengths of all pieces, which is the document length.
    #[must_use]
    pub fn len_chars(&self) -> CharLength { self.total_length }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize { self.pieces.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.pieces.is_empty() }

    #[must_use]
    pub fn as_slice(&self) -> &[Piece] { &self.pieces }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> { self.pieces.iter() }

    /// Find the piece that holds the character at document offset `index`.
    ///
    /// Returns [None] if `index` is at or past the end of the document. Callers use
    /// this to mean "append" (insertion) or "nothing to do" (deletion).
    #[must_use]
    pub fn resolve(&self, index: CharIndex) -> Option<RelativePiece> {
        if self.total_length.is_overflowed_by(index) {
            return None;
        }

        let mut from = CharIndex::default();
        for (piece_index, piece) in self.pieces.iter().enumerate() {
            let until = from + piece.length();
            if index < until {
                return Some(RelativePiece {
                    from,
                    index: piece_index,
                    piece: *piece,
                });
            }
            from = until;
        }

        None
    }

    pub fn push(&mut self, piece: Piece) {
        self.total_length += piece.length();
        self.pieces.push(piece);
    }

    /// Replace the piece at `index` with `replacement`, keeping document order. Returns
    /// the piece that was replaced.
    pub fn replace(&mut self, index: usize, replacement: ReplacementPieces) -> Option<Piece> {
        if index >= self.pieces.len() {
            return None;
        }

        let added = replacement
            .iter()
            .fold(ch_len(0), |acc, piece| acc + piece.length());
        let removed: SmallVec<[Piece; 1]> =
            self.pieces.splice(index..=index, replacement).collect();

        let removed = removed.first().copied()?;
        self.total_length -= removed.length();
        self.total_length += added;
        Some(removed)
    }

    /// Remove the piece at `index`. Returns it.
    pub fn remove(&mut self, index: usize) -> Option<Piece> {
        if index >= self.pieces.len() {
            return None;
        }
        let removed = self.pieces.remove(index);
        self.total_length -= removed.length();
        Some(removed)
    }

    /// Drop the first character of the piece at `index`. A single character piece is
    /// removed instead.
    pub fn shrink_front(&mut self, index: usize) {
        self.shrink_with(index, Piece::shrink_front);
    }

    /// Drop the last character of the piece at `index`. A single character piece is
    /// removed instead.
    pub fn shrink_back(&mut self, index: usize) {
        self.shrink_with(index, Piece::shrink_back);
    }

    fn shrink_with(&mut self, index: usize, shrink: fn(&Piece) -> Option<Piece>) {
        let Some(slot) = self.pieces.get_mut(index) else {
            return;
        };
        if let Some(shrunk) = shrink(slot) {
            *slot = shrunk;
            self.total_length -= ch_len(1);
        } else {
            self.remove(index);
        }
    }
}

impl<'a> IntoIterator for &'a PieceSequence {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;
    fn into_iter(self) -> Self::IntoIter { self.pieces.iter() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;
    use crate::{BufferKind, ch_index};

    fn piece(start: usize, length: usize) -> Piece {
        Piece::new(ch_index(start), ch_len(length), BufferKind::Original).unwrap()
    }

    /// Three pieces covering document ranges `[0, 2)`, `[2, 5)` and `[5, 6)`.
    fn sequence() -> PieceSequence {
        let mut it = PieceSequence::new();
        it.push(piece(0, 2));
        it.push(piece(10, 3));
        it.push(piece(20, 1));
        it
    }

    #[test]
    fn test_push_tracks_length() {
        let it = sequence();
        assert_eq!(it.len(), 3);
        assert_eq!(it.len_chars(), ch_len(6));
    }

    #[test]
    fn test_resolve() {
        let it = sequence();

        let first = it.resolve(ch_index(0)).unwrap();
        assert_eq!((first.from, first.index), (ch_index(0), 0));

        let boundary = it.resolve(ch_index(2)).unwrap();
        assert_eq!((boundary.from, boundary.index), (ch_index(2), 1));
        assert_eq!(boundary.piece, piece(10, 3));

        let inside = it.resolve(ch_index(4)).unwrap();
        assert_eq!((inside.from, inside.index), (ch_index(2), 1));

        let last = it.resolve(ch_index(5)).unwrap();
        assert_eq!((last.from, last.index), (ch_index(5), 2));

        assert_eq!(it.resolve(ch_index(6)), None);
        assert_eq!(it.resolve(ch_index(100)), None);
        assert_eq!(PieceSequence::new().resolve(ch_index(0)), None);
    }

    #[test]
    fn test_replace() {
        let mut it = sequence();
        let replaced = it.replace(1, smallvec![piece(10, 1), piece(30, 4), piece(11, 2)]);
        assert_eq!(replaced, Some(piece(10, 3)));
        assert_eq!(
            it.as_slice(),
            &[piece(0, 2), piece(10, 1), piece(30, 4), piece(11, 2), piece(20, 1)]
        );
        assert_eq!(it.len_chars(), ch_len(10));

        assert_eq!(it.replace(9, smallvec![piece(0, 1)]), None);
        assert_eq!(it.len(), 5);
    }

    #[test]
    fn test_remove_and_shrink() {
        let mut it = sequence();
        assert_eq!(it.remove(2), Some(piece(20, 1)));
        assert_eq!(it.remove(2), None);
        assert_eq!(it.len_chars(), ch_len(5));

        it.shrink_front(1);
        it.shrink_back(0);
        assert_eq!(it.as_slice(), &[piece(0, 1), piece(11, 2)]);
        assert_eq!(it.len_chars(), ch_len(3));
    }

    #[test]
    fn test_shrink_single_char_piece_removes_it() {
        let mut it = sequence();

        it.shrink_back(2);
        assert_eq!(it.as_slice(), &[piece(0, 2), piece(10, 3)]);
        assert_eq!(it.len_chars(), ch_len(5));

        it.shrink_front(0);
        it.shrink_front(0);
        assert_eq!(it.as_slice(), &[piece(10, 3)]);
        assert_eq!(it.len_chars(), ch_len(3));
        assert!(it.iter().all(|piece| !piece.length().is_zero()));

        // Out of range is a no-op.
        it.shrink_back(5);
        assert_eq!(it.len_chars(), ch_len(3));
    }
}
