// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character based units used to address text in a [`PieceTable`].
//!
//! - [`CharIndex`] is a 0-based position, counted in Unicode code points.
//! - [`CharLength`] is a size, counted in Unicode code points.
//!
//! Both are thin wrappers around `usize`, so they can never be negative. Signed values
//! (eg: from a scripting layer or an FFI boundary) must go through
//! [`TryFrom<i64>`], which fails fast with a [`PieceTableError`] instead of clamping.
//!
//! [`PieceTable`]: crate::PieceTable

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::{Add, AddAssign, Deref, Sub, SubAssign}};

use crate::PieceTableError;

/// A 0-based code point offset, either into the document or into one of its buffers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CharIndex(pub usize);

/// A count of code points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CharLength(pub usize);

pub fn ch_index(arg_char_index: impl Into<CharIndex>) -> CharIndex {
    arg_char_index.into()
}

pub fn ch_len(arg_char_length: impl Into<CharLength>) -> CharLength {
    arg_char_length.into()
}

impl CharIndex {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    /// Distance from `origin` to this index. Returns [None] if `origin` is past this
    /// index.
    #[must_use]
    pub fn offset_from(&self, origin: CharIndex) -> Option<CharLength> {
        self.0.checked_sub(origin.0).map(CharLength)
    }
}

impl CharLength {
    #[must_use]
    pub fn as_usize(&self) -> usize { self.0 }

    #[must_use]
    pub fn is_zero(&self) -> bool { self.0 == 0 }

    /// Returns `true` if `index` falls outside of `[0, self)`, ie: there is no character
    /// at `index` in content of this length.
    #[must_use]
    pub fn is_overflowed_by(&self, index: CharIndex) -> bool { index.0 >= self.0 }
}

impl Deref for CharIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Deref for CharLength {
    type Target = usize;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<usize> for CharIndex {
    fn from(it: usize) -> Self { Self(it) }
}

impl From<usize> for CharLength {
    fn from(it: usize) -> Self { Self(it) }
}

impl TryFrom<i64> for CharIndex {
    type Error = PieceTableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(PieceTableError::NegativeIndex { value });
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| PieceTableError::ValueTooLarge { value })
    }
}

impl TryFrom<i64> for CharLength {
    type Error = PieceTableError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(PieceTableError::NegativeLength { value });
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| PieceTableError::ValueTooLarge { value })
    }
}

impl Add<CharLength> for CharIndex {
    type Output = CharIndex;
    fn add(self, rhs: CharLength) -> Self::Output { CharIndex(self.0 + rhs.0) }
}

impl AddAssign<CharLength> for CharIndex {
    fn add_assign(&mut self, rhs: CharLength) { self.0 += rhs.0; }
}

impl Add for CharLength {
    type Output = CharLength;
    fn add(self, rhs: CharLength) -> Self::Output { CharLength(self.0 + rhs.0) }
}

impl AddAssign for CharLength {
    fn add_assign(&mut self, rhs: CharLength) { self.0 += rhs.0; }
}

/// Saturates at zero.
impl Sub for CharLength {
    type Output = CharLength;
    fn sub(self, rhs: CharLength) -> Self::Output {
        CharLength(self.0.saturating_sub(rhs.0))
    }
}

/// Saturates at zero.
impl SubAssign for CharLength {
    fn sub_assign(&mut self, rhs: CharLength) { self.0 = self.0.saturating_sub(rhs.0); }
}

impl Display for CharIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
}

impl Display for CharLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
}
