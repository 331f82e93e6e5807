// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Piece table
//!
//! [`PieceTable`] is an editable text representation for the document model of a text
//! editor. It lets you append, insert and delete in a large text without copying the
//! whole text on every edit, and materialize the current text as one [`String`] when
//! you need it.
//!
//! ## How it works
//!
//! The text lives in two backing buffers, held together in a [`BufferPair`]:
//!
//! - **original**: the text supplied when the document is created. It is never mutated.
//! - **addendum**: an append-only buffer. Every inserted or appended run of text is
//!   pushed onto the end of it, and nothing is ever removed from it.
//!
//! The document itself is a [`PieceSequence`], an ordered list of [`Piece`]s. Each piece
//! points at a contiguous run of characters in one of the two buffers by `start` and
//! `length`. Reading every piece's slice in order reproduces the document.
//!
//! ```text
//! original: "abc def"          addendum: "xyz "
//!            0123456                      0123
//!
//! insert("xyz ", 4) on "abc def":
//!
//!   ┌────────────────────┐   ┌────────────────────┐   ┌────────────────────┐
//!   │ Original  start: 0 │ → │ Addendum  start: 0 │ → │ Original  start: 4 │
//!   │           len:   4 │   │           len:   4 │   │           len:   3 │
//!   └────────────────────┘   └────────────────────┘   └────────────────────┘
//!          "abc "                   "xyz "                    "def"
//! ```
//!
//! Every edit first resolves a document-wide character offset to the piece containing
//! it (a [`RelativePiece`]), and then splits, shrinks, inserts or removes pieces. No
//! text is ever moved around inside the buffers.
//!
//! ## Units
//!
//! Offsets and lengths count Unicode code points (not bytes, and not grapheme
//! clusters). They are expressed with the [`CharIndex`] and [`CharLength`] newtypes,
//! which you can create with [`ch_index()`] and [`ch_len()`], or from a plain `usize`.
//! Signed values go through [`TryFrom<i64>`], which rejects negative values with a
//! [`PieceTableError`].
//!
//! ## Example
//!
//! ```
//! use r3bl_piece_table::PieceTable;
//!
//! let mut doc = PieceTable::new("abc");
//! doc.insert(" xyz", 3).delete(1, 5);
//! assert_eq!(doc.to_string(), "az");
//! ```
//!
//! ## Edge cases
//!
//! - Inserting at or past the end of the document appends.
//! - Deleting at or past the end of the document does nothing.
//! - Inserting or appending empty text does nothing; zero-length pieces never exist.
//!
//! ## Logging
//!
//! Edits emit [`tracing`] events when [`DEBUG_PIECE_TABLE_EDITS`] is `true`. This crate
//! never installs a subscriber; that is up to the application.
//!
//! ## Concurrency
//!
//! A [`PieceTable`] has no internal synchronization. It is a plain owned value; share it
//! between threads the usual way (eg: behind a [`std::sync::Mutex`]).

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable or disable debug logging of every edit (append, insert, delete) made to a
/// [`PieceTable`].
pub const DEBUG_PIECE_TABLE_EDITS: bool = true;

/// Enable or disable debug logging of index resolution. This is very noisy, since every
/// edit resolves at least one index, and [`PieceTable::delete`] resolves one per
/// character.
pub const DEBUG_PIECE_TABLE_RESOLVE: bool = false;

/// Initial capacity of the [`PieceSequence`] for a [`PieceTable`] created with
/// [`PieceTable::new`].
pub const DEFAULT_PIECE_CAPACITY: usize = 16;

// Attach.
mod char_buffer;
mod piece;
mod piece_sequence;
mod pt_core;
mod pt_delete_ops;
mod pt_error;
mod pt_insert_ops;
mod pt_text_ops;
mod pt_validate;
mod units;

#[cfg(test)]
mod pt_scenario_tests;

// Re-export.
pub use char_buffer::*;
pub use piece::*;
pub use piece_sequence::*;
pub use pt_core::*;
pub use pt_error::*;
pub use pt_text_ops::*;
pub use units::*;
