// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`PieceTable`] document type: construction, append, and queries.
//!
//! Insertion lives in `pt_insert_ops`, deletion in `pt_delete_ops`, and
//! materialization in `pt_text_ops`.

use crate::{BufferKind, BufferPair, CharIndex, CharLength, DEBUG_PIECE_TABLE_EDITS,
            DEBUG_PIECE_TABLE_RESOLVE, DEFAULT_PIECE_CAPACITY, Piece, PieceSequence,
            RelativePiece, ch_index, ch_len};

/// An editable text document stored as a piece table. See the [crate docs](crate) for
/// an overview.
///
/// Every edit returns `&mut Self`, so edits can be chained:
///
/// ```
/// use r3bl_piece_table::PieceTable;
///
/// let mut doc = PieceTable::default();
/// doc.insert("abc", 0).insert(" ghi", 3).insert(" def", 3);
/// assert_eq!(doc.to_string(), "abc def ghi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PieceTable {
    pub(crate) buffers: BufferPair,
    pub(crate) pieces: PieceSequence,
}

impl PieceTable {
    /// Create a document whose original buffer is `original`. A non-empty `original`
    /// is covered by exactly one piece.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        Self::with_capacity(original, 0, DEFAULT_PIECE_CAPACITY)
    }

    /// Same as [`PieceTable::new`], but pre-allocates `addendum_byte_capacity` bytes for
    /// inserted text and room for `piece_capacity` pieces.
    #[must_use]
    pub fn with_capacity(
        original: impl Into<String>,
        addendum_byte_capacity: usize,
        piece_capacity: usize,
    ) -> Self {
        let buffers = BufferPair::new(original.into(), addendum_byte_capacity);
        let mut pieces = PieceSequence::with_capacity(piece_capacity);

        // An empty original text gets no piece.
        let original_length = buffers.original().len_chars();
        if let Some(piece) = Piece::new(ch_index(0), original_length, BufferKind::Original) {
            pieces.push(piece);
        }

        Self { buffers, pieces }
    }

    /// Add `text` to the end of the document. Empty `text` is a no-op.
    pub fn append(&mut self, text: &str) -> &mut Self {
        let Some(piece) = self.push_to_addendum(text) else {
            return self;
        };
        self.pieces.push(piece);

        DEBUG_PIECE_TABLE_EDITS.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📝 append",
                piece = ?piece,
                piece_count = self.pieces.len(),
                doc_len = %self.len()
            );
        });

        self
    }

    /// Document length in code points.
    #[must_use]
    pub fn len(&self) -> CharLength { self.pieces.len_chars() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len().is_zero() }

    /// Number of pieces currently describing the document.
    #[must_use]
    pub fn piece_count(&self) -> usize { self.pieces.len() }

    /// Read-only view of the piece sequence, in document order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] { self.pieces.as_slice() }

    #[must_use]
    pub fn buffers(&self) -> &BufferPair { &self.buffers }

    /// The character at document offset `index`, or [None] if it is past the end.
    #[must_use]
    pub fn char_at(&self, arg_index: impl Into<CharIndex>) -> Option<char> {
        let index: CharIndex = arg_index.into();
        let affected = self.resolve(index)?;
        let local = index.offset_from(affected.from)?;
        self.buffers
            .get(affected.piece.buffer())
            .char_at(affected.piece.start() + local)
    }

    /// Map a document offset to the piece containing it. See
    /// [`PieceSequence::resolve()`].
    pub(crate) fn resolve(&self, index: CharIndex) -> Option<RelativePiece> {
        let it = self.pieces.resolve(index);

        DEBUG_PIECE_TABLE_RESOLVE.then(|| {
            tracing::debug!(
                message = "🔍 resolve",
                index = %index,
                relative_piece = ?it
            );
        });

        it
    }

    /// Push `text` onto the addendum, and return a new piece covering it. The piece's
    /// `start` is the addendum length before the push. Returns [None] for empty `text`.
    pub(crate) fn push_to_addendum(&mut self, text: &str) -> Option<Piece> {
        let length = ch_len(text.chars().count());
        let start = self.buffers.append_to_addendum(text);
        Piece::new(start, length, BufferKind::Addendum)
    }
}

impl From<&str> for PieceTable {
    fn from(original: &str) -> Self { Self::new(original) }
}

impl From<String> for PieceTable {
    fn from(original: String) -> Self { Self::new(original) }
}

/// Two documents are equal if they hold the same text, no matter how it is split into
/// pieces.
impl PartialEq for PieceTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .chunks()
                .flat_map(str::chars)
                .eq(other.chunks().flat_map(str::chars))
    }
}

impl Eq for PieceTable {}
