// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for [`PieceTable`]. See [`PieceTableError`] for details.
//!
//! [`PieceTable`]: crate::PieceTable

/// Errors that can be produced while addressing or checking a [`PieceTable`].
///
/// Edits themselves never fail: an out of range insertion appends, an out of range
/// deletion does nothing. Errors come from two places only:
///
/// | Variant                                             | Produced by                     |
/// | :-------------------------------------------------- | :------------------------------ |
/// | [`NegativeIndex`], [`NegativeLength`], [`ValueTooLarge`] | [`TryFrom<i64>`] for the units  |
/// | [`ZeroLengthPiece`], [`PieceOutOfBounds`], [`LengthMismatch`] | [`PieceTable::validate()`] |
///
/// [`LengthMismatch`]: Self::LengthMismatch
/// [`NegativeIndex`]: Self::NegativeIndex
/// [`NegativeLength`]: Self::NegativeLength
/// [`PieceOutOfBounds`]: Self::PieceOutOfBounds
/// [`PieceTable::validate()`]: crate::PieceTable::validate
/// [`PieceTable`]: crate::PieceTable
/// [`ValueTooLarge`]: Self::ValueTooLarge
/// [`ZeroLengthPiece`]: Self::ZeroLengthPiece
#[derive(Debug, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PieceTableError {
    #[error("Negative character index: {value}")]
    #[diagnostic(
        code(r3bl_piece_table::negative_index),
        help("Character indices are 0-based offsets into the current text")
    )]
    NegativeIndex { value: i64 },

    #[error("Negative character length: {value}")]
    #[diagnostic(
        code(r3bl_piece_table::negative_length),
        help("Lengths count characters and must be 0 or more")
    )]
    NegativeLength { value: i64 },

    #[error("Value {value} does not fit in usize on this platform")]
    #[diagnostic(code(r3bl_piece_table::value_too_large))]
    ValueTooLarge { value: i64 },

    #[error("Piece #{piece_index} has zero length")]
    #[diagnostic(
        code(r3bl_piece_table::zero_length_piece),
        help("Pieces that shrink to zero characters must be removed from the sequence")
    )]
    ZeroLengthPiece { piece_index: usize },

    #[error(
        "Piece #{piece_index} ends at {end}, past the end of its buffer ({buffer_len})"
    )]
    #[diagnostic(code(r3bl_piece_table::piece_out_of_bounds))]
    PieceOutOfBounds {
        piece_index: usize,
        end: usize,
        buffer_len: usize,
    },

    #[error("Pieces add up to {actual} characters, but the document length is {expected}")]
    #[diagnostic(code(r3bl_piece_table::length_mismatch))]
    LengthMismatch { expected: usize, actual: usize },
}
