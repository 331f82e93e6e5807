// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character deletion for [`PieceTable`].
//!
//! Deleting the character at document offset `index` resolves the piece holding it, and
//! then, depending on where the character falls (see [`DeletePosition`]):
//!
//! ```text
//! Only:      [x]            →  (piece removed)
//! First:     [xbcd]         →  [bcd]        start += 1, length -= 1
//! Last:      [abcx]         →  [abc]        length -= 1
//! Within:    [abxcd]        →  [ab][cd]     split after x, then drop x from the front half
//! ```
//!
//! Character deletion compares against the last character of the piece
//! (`from + length - 1`), not against the gap after it as insertion does.
//!
//! Range deletion repeats single character deletion at the same offset, since each
//! deletion shifts the following text left by one.

use smallvec::smallvec;

use crate::{CharIndex, CharLength, DEBUG_PIECE_TABLE_EDITS, DeletePosition, PieceTable,
            ch_len};

impl PieceTable {
    /// Delete the single character at document offset `index`. An `index` at or past the
    /// end of the document is a no-op.
    pub fn delete_char(&mut self, arg_index: impl Into<CharIndex>) -> &mut Self {
        let index: CharIndex = arg_index.into();

        let Some(affected) = self.resolve(index) else {
            return self;
        };

        // The resolved piece contains `index`, so this never misses.
        let Some(position) = affected.char_position(index) else {
            return self;
        };

        match position {
            DeletePosition::Only => {
                self.pieces.remove(affected.index);
            }
            DeletePosition::First => self.pieces.shrink_front(affected.index),
            DeletePosition::Last => self.pieces.shrink_back(affected.index),
            DeletePosition::Within(local) => {
                // Split right after the deleted char, then drop it from the front half.
                let Some((before, after)) = affected.piece.split_at(local + ch_len(1))
                else {
                    return self;
                };
                let Some(before) = before.shrink_back() else {
                    return self;
                };
                self.pieces.replace(affected.index, smallvec![before, after]);
            }
        }

        DEBUG_PIECE_TABLE_EDITS.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✂️ delete_char",
                index = %index,
                position = ?position,
                piece_count = self.pieces.len(),
                doc_len = %self.len()
            );
        });

        self
    }

    /// Delete `length` characters starting at document offset `start`. Characters past
    /// the end of the document are ignored.
    pub fn delete(
        &mut self,
        arg_start: impl Into<CharIndex>,
        arg_length: impl Into<CharLength>,
    ) -> &mut Self {
        let start: CharIndex = arg_start.into();
        let length: CharLength = arg_length.into();

        for _ in 0..length.as_usize() {
            // Every remaining iteration would be a no-op.
            if self.len().is_overflowed_by(start) {
                break;
            }
            self.delete_char(start);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::{BufferKind, Piece, PieceTable, ch_index, ch_len};

    #[test_case(0, "bc" ; "first char")]
    #[test_case(1, "ac" ; "middle char")]
    #[test_case(2, "ab" ; "last char")]
    #[test_case(3, "abc" ; "at end is noop")]
    #[test_case(100, "abc" ; "past end is noop")]
    fn test_delete_char(index: usize, expected: &str) {
        let mut doc = PieceTable::new("abc");
        doc.delete_char(index);
        assert_eq!(doc.to_string(), expected);
        doc.validate().unwrap();
    }

    #[test]
    fn test_delete_first_shrinks_front() {
        let mut doc = PieceTable::new("abc");
        doc.delete_char(0);
        assert_eq!(
            doc.pieces(),
            &[Piece::new(ch_index(1), ch_len(2), BufferKind::Original).unwrap()]
        );
    }

    #[test]
    fn test_delete_last_shrinks_back() {
        let mut doc = PieceTable::new("abc");
        doc.delete_char(2);
        assert_eq!(
            doc.pieces(),
            &[Piece::new(ch_index(0), ch_len(2), BufferKind::Original).unwrap()]
        );
    }

    #[test]
    fn test_delete_within_splits_piece() {
        let mut doc = PieceTable::new("abcde");
        doc.delete_char(2);
        assert_eq!(doc.to_string(), "abde");
        assert_eq!(
            doc.pieces(),
            &[
                Piece::new(ch_index(0), ch_len(2), BufferKind::Original).unwrap(),
                Piece::new(ch_index(3), ch_len(2), BufferKind::Original).unwrap(),
            ]
        );
    }

    #[test]
    fn test_delete_single_char_piece_removes_it() {
        let mut doc = PieceTable::new("abc");
        doc.delete_char(1);
        assert_eq!(doc.piece_count(), 2);

        doc.delete_char(1);
        assert_eq!(doc.to_string(), "a");
        assert_eq!(doc.piece_count(), 1);
        doc.validate().unwrap();
    }

    #[test]
    fn test_delete_every_char() {
        let mut doc = PieceTable::new("ab");
        doc.append("cd");
        doc.delete_char(0).delete_char(0).delete_char(0).delete_char(0);
        assert!(doc.is_empty());
        assert_eq!(doc.piece_count(), 0);
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn test_delete_multi_byte() {
        let mut doc = PieceTable::new("a😀é");
        doc.delete_char(1);
        assert_eq!(doc.to_string(), "aé");
        doc.validate().unwrap();
    }

    #[test_case("abc", 1, 5, "a" ; "runs past end")]
    #[test_case("abcdef", 1, 3, "aef" ; "interior")]
    #[test_case("abcdef", 0, 6, "" ; "everything")]
    #[test_case("abc", 0, 0, "abc" ; "zero length")]
    #[test_case("abc", 7, 2, "abc" ; "starts past end")]
    fn test_delete(original: &str, start: usize, length: usize, expected: &str) {
        let mut doc = PieceTable::new(original);
        doc.delete(start, length);
        assert_eq!(doc.to_string(), expected);
        doc.validate().unwrap();
    }

    #[test]
    fn test_delete_across_pieces() {
        let mut doc = PieceTable::new("abc");
        doc.insert(" xyz", 3);
        doc.delete(1, 5);
        assert_eq!(doc.to_string(), "az");
        doc.validate().unwrap();
    }
}
