//! Board coordinates and play direction

use std::fmt;

/// Direction a placement extends along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right, advancing the column
    Horizontal,
    /// Top to bottom, advancing the row
    Vertical,
}

impl Axis {
    /// Both axes in search order
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The axis at right angles to this one
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A cell coordinate: 1-based row, 0-based column
///
/// Coordinates are signed so that neighbours of edge cells can be expressed;
/// the board decides whether a position is on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Row, 1-based
    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Column, 0-based (`a` is 0)
    #[inline]
    #[must_use]
    pub const fn column(self) -> i32 {
        self.column
    }

    /// The next cell along `axis`
    #[inline]
    #[must_use]
    pub const fn step(self, axis: Axis) -> Self {
        self.offset(axis, 1)
    }

    /// Move `n` cells along `axis` (negative moves backwards)
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Axis, Position};
    ///
    /// let start = Position::new(8, 7);
    /// assert_eq!(start.offset(Axis::Horizontal, -2), Position::new(8, 5));
    /// assert_eq!(start.offset(Axis::Vertical, 3), Position::new(11, 7));
    /// ```
    #[must_use]
    pub const fn offset(self, axis: Axis, n: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.row, self.column + n),
            Axis::Vertical => Self::new(self.row + n, self.column),
        }
    }

    /// The cells along `axis` starting here, `len` of them
    pub fn walk(self, axis: Axis, len: usize) -> impl Iterator<Item = Self> {
        (0..len as i32).map(move |i| self.offset(axis, i))
    }

    /// Column letter, if the column is in `a..=z`
    #[must_use]
    pub fn column_letter(self) -> Option<char> {
        u8::try_from(self.column)
            .ok()
            .filter(|c| *c < 26)
            .map(|c| char::from(b'a' + c))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{letter}{}", self.row),
            None => write!(f, "({},{})", self.row, self.column),
        }
    }
}
