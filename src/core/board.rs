//! The game board
//!
//! A square grid of premium squares with a fixed center cell and the
//! connectivity rule that every placement must satisfy.

use super::{Axis, Position, Premium, Square, Tile};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Permitted board sizes
pub const SIZE_RANGE: RangeInclusive<usize> = 11..=26;

/// Board construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardSizeError {
    #[error("board size must be between 11 and 26, got {0}")]
    OutOfRange(usize),

    #[error("expected {expected} rows of {expected} squares")]
    Shape { expected: usize },
}

/// A `size` x `size` grid of squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    center: Position,
    occupied: usize,
}

impl Board {
    /// Blank board of standard squares
    ///
    /// # Errors
    /// Returns `BoardSizeError::OutOfRange` if `size` is outside `11..=26`.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Board, Position};
    ///
    /// let board = Board::new(15).unwrap();
    /// assert_eq!(board.center(), Position::new(8, 7));
    /// assert!(Board::new(10).is_err());
    /// ```
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        if !SIZE_RANGE.contains(&size) {
            return Err(BoardSizeError::OutOfRange(size));
        }
        Ok(Self {
            size,
            squares: vec![Square::default(); size * size],
            center: center_of(size),
            occupied: 0,
        })
    }

    /// Board with the given premium layout, one inner `Vec` per row
    ///
    /// # Errors
    /// Fails if the size is out of range or the rows are not square.
    pub fn from_rows(rows: Vec<Vec<Premium>>) -> Result<Self, BoardSizeError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        if rows.iter().any(|row| row.len() != size) {
            return Err(BoardSizeError::Shape { expected: size });
        }
        board.squares = rows.into_iter().flatten().map(Square::new).collect();
        Ok(board)
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Center square: the middle cell, or the top-left of the four middle
    /// cells on even-sized boards
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Position {
        self.center
    }

    /// Whether `pos` lies on the board
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Square at `pos`, or `None` off the board
    #[must_use]
    pub fn square(&self, pos: Position) -> Option<&Square> {
        self.index(pos).map(|i| &self.squares[i])
    }

    #[must_use]
    pub fn has_tile_at(&self, pos: Position) -> bool {
        self.square(pos).is_some_and(Square::is_occupied)
    }

    /// True until the first tile is placed
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Number of occupied squares
    #[inline]
    #[must_use]
    pub const fn tile_count(&self) -> usize {
        self.occupied
    }

    /// Place a tile; fails off the board or on an occupied square
    pub fn place_tile(&mut self, pos: Position, tile: Tile) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let placed = self.squares[i].place(tile);
        if placed {
            self.occupied += 1;
        }
        placed
    }

    /// Whether `len` cells from `anchor` along `axis` all lie on the board
    #[must_use]
    pub fn fits(&self, anchor: Position, axis: Axis, len: usize) -> bool {
        len > 0 && self.contains(anchor) && self.contains(anchor.offset(axis, len as i32 - 1))
    }

    /// Connectivity rule for a placement of `word`
    ///
    /// On an empty board one of the covered cells must be the center. On a
    /// non-empty board one covered cell must be occupied, or have an occupied
    /// neighbour across the play direction. Perpendicular words formed by
    /// the play are not checked, and neither are letters on shared cells.
    /// Off-board cells count as empty.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Axis, Board, Position};
    ///
    /// let board = Board::new(15).unwrap();
    /// assert!(board.is_legal(Position::new(8, 6), Axis::Horizontal, "HI"));
    /// assert!(!board.is_legal(Position::new(1, 0), Axis::Horizontal, "HI"));
    /// ```
    #[must_use]
    pub fn is_legal(&self, anchor: Position, axis: Axis, word: &str) -> bool {
        let len = word.chars().count();
        if len == 0 {
            return false;
        }

        if self.is_empty() {
            return anchor.walk(axis, len).any(|p| p == self.center);
        }

        let across = axis.perpendicular();
        anchor.walk(axis, len).any(|p| {
            self.has_tile_at(p)
                || self.has_tile_at(p.offset(across, -1))
                || self.has_tile_at(p.offset(across, 1))
        })
    }

    /// Letters of `word` that fall on empty cells, in word order
    ///
    /// These are the letters a rack must supply. Occupied cells keep their
    /// tile and off-board cells count as empty.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Axis, Board, Position, Tile};
    ///
    /// let mut board = Board::new(15).unwrap();
    /// board.place_tile(Position::new(8, 8), Tile::letter('A', 1));
    /// assert_eq!(board.open_letters(Position::new(8, 7), Axis::Horizontal, "CAT"), "CT");
    /// ```
    #[must_use]
    pub fn open_letters(&self, anchor: Position, axis: Axis, word: &str) -> String {
        anchor
            .walk(axis, word.chars().count())
            .zip(word.chars())
            .filter(|&(pos, _)| !self.has_tile_at(pos))
            .map(|(_, c)| c)
            .collect()
    }

    /// Rows of squares, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row() - 1).ok()?;
        let col = usize::try_from(pos.column()).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

const fn center_of(size: usize) -> Position {
    let half = (size / 2) as i32;
    if size % 2 == 0 {
        Position::new(half, half - 1)
    } else {
        Position::new(half + 1, half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, tiles: &[(i32, i32, char)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, c) in tiles {
            assert!(board.place_tile(Position::new(row, col), Tile::letter(c, 1)));
        }
        board
    }

    #[test]
    fn size_bounds() {
        assert!(Board::new(11).is_ok());
        assert!(Board::new(26).is_ok());
        assert_eq!(Board::new(10), Err(BoardSizeError::OutOfRange(10)));
        assert_eq!(Board::new(27), Err(BoardSizeError::OutOfRange(27)));
    }

    #[test]
    fn center_odd_and_even() {
        assert_eq!(Board::new(15).unwrap().center(), Position::new(8, 7));
        assert_eq!(Board::new(16).unwrap().center(), Position::new(8, 7));
        assert_eq!(Board::new(11).unwrap().center(), Position::new(6, 5));
        assert_eq!(Board::new(26).unwrap().center(), Position::new(13, 12));
    }

    #[test]
    fn off_board_lookups_return_none() {
        let board = Board::new(11).unwrap();
        assert!(board.square(Position::new(0, 0)).is_none());
        assert!(board.square(Position::new(1, -1)).is_none());
        assert!(board.square(Position::new(12, 0)).is_none());
        assert!(board.square(Position::new(1, 11)).is_none());
        assert!(board.square(Position::new(11, 10)).is_some());
        assert!(!board.has_tile_at(Position::new(0, 0)));
    }

    #[test]
    fn placement_is_monotonic() {
        let mut board = Board::new(11).unwrap();
        assert!(board.is_empty());
        let pos = Position::new(3, 3);
        assert!(board.place_tile(pos, Tile::letter('A', 1)));
        assert!(!board.place_tile(pos, Tile::letter('B', 3)));
        assert!(!board.place_tile(Position::new(0, 3), Tile::letter('B', 3)));
        assert!(!board.is_empty());
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn from_rows_checks_shape() {
        let rows = vec![vec![Premium::None; 11]; 11];
        assert!(Board::from_rows(rows).is_ok());

        let mut ragged = vec![vec![Premium::None; 11]; 11];
        ragged[4].pop();
        assert_eq!(
            Board::from_rows(ragged),
            Err(BoardSizeError::Shape { expected: 11 })
        );
    }

    #[test]
    fn fits_checks_both_ends() {
        let board = Board::new(11).unwrap();
        assert!(board.fits(Position::new(1, 9), Axis::Horizontal, 2));
        assert!(!board.fits(Position::new(1, 9), Axis::Horizontal, 3));
        assert!(board.fits(Position::new(10, 0), Axis::Vertical, 2));
        assert!(!board.fits(Position::new(10, 0), Axis::Vertical, 3));
        assert!(!board.fits(Position::new(0, 0), Axis::Vertical, 1));
        assert!(!board.fits(Position::new(1, 0), Axis::Vertical, 0));
    }

    #[test]
    fn empty_board_requires_center() {
        let board = Board::new(15).unwrap();
        assert!(board.is_legal(Position::new(8, 7), Axis::Horizontal, "HI"));
        assert!(board.is_legal(Position::new(8, 6), Axis::Horizontal, "HI"));
        assert!(!board.is_legal(Position::new(8, 8), Axis::Horizontal, "HI"));
        assert!(board.is_legal(Position::new(5, 7), Axis::Vertical, "HELLO"));
        assert!(!board.is_legal(Position::new(9, 7), Axis::Vertical, "HELLO"));
        assert!(!board.is_legal(Position::new(8, 7), Axis::Horizontal, ""));
    }

    #[test]
    fn covering_an_occupied_cell_connects() {
        let board = board_with(15, &[(8, 7, 'A')]);
        assert!(board.is_legal(Position::new(8, 5), Axis::Horizontal, "CAT"));
        assert!(board.is_legal(Position::new(6, 7), Axis::Vertical, "CAT"));
    }

    #[test]
    fn perpendicular_neighbour_connects() {
        let board = board_with(15, &[(8, 7, 'A')]);
        // Horizontal play on the row above touches A from above
        assert!(board.is_legal(Position::new(7, 6), Axis::Horizontal, "OX"));
        // Vertical play in the column to the right touches A from the side
        assert!(board.is_legal(Position::new(7, 8), Axis::Vertical, "OX"));
    }

    #[test]
    fn inline_neighbour_does_not_connect() {
        let board = board_with(15, &[(8, 7, 'A')]);
        // Ends right before A on the same row: only the axis neighbour is occupied
        assert!(!board.is_legal(Position::new(8, 5), Axis::Horizontal, "OX"));
        // Ends right above A in the same column
        assert!(!board.is_legal(Position::new(6, 7), Axis::Vertical, "OX"));
    }

    #[test]
    fn far_placement_is_illegal() {
        let board = board_with(15, &[(8, 7, 'A')]);
        assert!(!board.is_legal(Position::new(1, 0), Axis::Horizontal, "CAT"));
    }

    #[test]
    fn edge_cells_treat_off_board_as_empty() {
        let board = board_with(11, &[(1, 0, 'A')]);
        assert!(board.is_legal(Position::new(2, 0), Axis::Horizontal, "OX"));
        // Overhanging play whose on-board cell touches nothing
        assert!(!board.is_legal(Position::new(11, 9), Axis::Horizontal, "OXEN"));
    }
}
