// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text insertion for [`PieceTable`].
//!
//! Inserting `text` at document offset `index`:
//!
//! 1. Resolve the piece containing `index`. If there is none (`index` is at or past the
//!    end of the document), append instead.
//! 2. Push `text` onto the addendum and make a new piece for it.
//! 3. Replace the affected piece with 2 or 3 pieces, depending on where `index` falls
//!    (see [`InsertPosition`]):
//!
//! ```text
//! AtStart:   [affected]          →  [new][affected]
//! AtEnd:     [affected]          →  [affected][new]   (never reached, see below)
//! Within:    [before|after]      →  [before][new][after]
//! ```
//!
//! A split only happens strictly inside a piece, so both halves are non-empty. Resolution
//! returns the piece holding the character at `index`, so an `index` on a piece boundary
//! is always [`InsertPosition::AtStart`] of the following piece.

use smallvec::smallvec;

use crate::{CharIndex, DEBUG_PIECE_TABLE_EDITS, InsertPosition, PieceTable,
            ReplacementPieces};

impl PieceTable {
    /// Insert `text` so that it starts at document offset `index`. An `index` at or past
    /// the end of the document appends. Empty `text` is a no-op.
    pub fn insert(&mut self, text: &str, arg_index: impl Into<CharIndex>) -> &mut Self {
        let index: CharIndex = arg_index.into();

        if text.is_empty() {
            return self;
        }

        let Some(affected) = self.resolve(index) else {
            return self.append(text);
        };

        // The resolved piece contains `index`, so this never misses.
        let Some(position) = affected.gap_position(index) else {
            return self;
        };

        let Some(new_piece) = self.push_to_addendum(text) else {
            return self;
        };

        let replacement: ReplacementPieces = match position {
            InsertPosition::AtStart => smallvec![new_piece, affected.piece],
            InsertPosition::AtEnd => smallvec![affected.piece, new_piece],
            InsertPosition::Within(local) => {
                let Some((before, after)) = affected.piece.split_at(local) else {
                    return self;
                };
                smallvec![before, new_piece, after]
            }
        };

        self.pieces.replace(affected.index, replacement);

        DEBUG_PIECE_TABLE_EDITS.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📝 insert",
                index = %index,
                position = ?position,
                new_piece = ?new_piece,
                piece_count = self.pieces.len(),
                doc_len = %self.len()
            );
        });

        self
    }
}
