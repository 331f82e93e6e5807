// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Result;

use crate::{PieceTable, PieceTableError, ch_len};

impl PieceTable {
    /// Check the structural invariants of the document:
    ///
    /// 1. No piece has zero length.
    /// 2. Every piece lies within the current length of its buffer.
    /// 3. The piece lengths add up to the document length.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, as a [`PieceTableError`] diagnostic. Edits never
    /// produce one of these; a failure here means the piece table has a bug.
    pub fn validate(&self) -> Result<()> {
        let mut total = ch_len(0);

        for (piece_index, piece) in self.pieces.iter().enumerate() {
            if piece.length().is_zero() {
                return Err(PieceTableError::ZeroLengthPiece { piece_index }.into());
            }

            let buffer_len = self.buffers.get(piece.buffer()).len_chars();
            if piece.end().as_usize() > buffer_len.as_usize() {
                return Err(PieceTableError::PieceOutOfBounds {
                    piece_index,
                    end: piece.end().as_usize(),
                    buffer_len: buffer_len.as_usize(),
                }
                .into());
            }

            total += piece.length();
        }

        if total != self.len() {
            return Err(PieceTableError::LengthMismatch {
                expected: self.len().as_usize(),
                actual: total.as_usize(),
            }
            .into());
        }

        Ok(())
    }
}
