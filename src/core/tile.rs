//! Tile representation
//!
//! A tile is either a plain lettered tile or a wildcard that receives its
//! letter exactly once.

use std::fmt;

/// Letter shown on a wildcard that has not been assigned yet
pub const UNASSIGNED: char = '_';

/// A single game tile
///
/// Plain tiles always carry an uppercase letter. Wildcards show `_` until
/// assigned, after which they carry a lowercase letter for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: char,
    value: i32,
    wildcard: bool,
    assigned: bool,
}

impl Tile {
    /// Create a plain tile; the letter is normalized to uppercase
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::Tile;
    ///
    /// let tile = Tile::letter('q', 12);
    /// assert_eq!(tile.char(), 'Q');
    /// assert_eq!(tile.value(), 12);
    /// assert!(!tile.is_wildcard());
    /// ```
    #[must_use]
    pub const fn letter(letter: char, value: i32) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            wildcard: false,
            assigned: false,
        }
    }

    /// Create an unassigned wildcard
    #[must_use]
    pub const fn wildcard(value: i32) -> Self {
        Self {
            letter: UNASSIGNED,
            value,
            wildcard: true,
            assigned: false,
        }
    }

    /// Letter currently shown on the tile
    #[inline]
    #[must_use]
    pub const fn char(&self) -> char {
        self.letter
    }

    /// Point value of the tile
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    #[inline]
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// True for a wildcard that can still take a letter
    #[inline]
    #[must_use]
    pub const fn is_free_wildcard(&self) -> bool {
        self.wildcard && !self.assigned
    }

    /// Assign a letter to an unassigned wildcard
    ///
    /// Returns `false` (and leaves the tile untouched) for plain tiles and for
    /// wildcards that already carry a letter.
    pub fn assign(&mut self, letter: char) -> bool {
        if !self.is_free_wildcard() || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letter = letter.to_ascii_lowercase();
        self.assigned = true;
        true
    }

    /// A new tile equal to this wildcard with `letter` assigned
    ///
    /// The receiver is not modified. Returns `None` if this tile cannot be
    /// assigned.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::Tile;
    ///
    /// let blank = Tile::wildcard(5);
    /// let as_e = blank.assigned_copy('E').unwrap();
    /// assert_eq!(as_e.char(), 'e');
    /// assert!(as_e.is_assigned());
    /// assert!(!blank.is_assigned());
    /// ```
    #[must_use]
    pub fn assigned_copy(&self, letter: char) -> Option<Self> {
        let mut copy = *self;
        copy.assign(letter).then_some(copy)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.letter, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tile_uppercases_letter() {
        let tile = Tile::letter('a', 1);
        assert_eq!(tile.char(), 'A');
        assert_eq!(tile.value(), 1);
        assert!(!tile.is_wildcard());
        assert!(!tile.is_assigned());
    }

    #[test]
    fn wildcard_starts_unassigned() {
        let tile = Tile::wildcard(5);
        assert_eq!(tile.char(), UNASSIGNED);
        assert!(tile.is_wildcard());
        assert!(tile.is_free_wildcard());
    }

    #[test]
    fn wildcard_assigns_once() {
        let mut tile = Tile::wildcard(5);
        assert!(tile.assign('Q'));
        assert_eq!(tile.char(), 'q');
        assert!(tile.is_assigned());

        assert!(!tile.assign('z'));
        assert_eq!(tile.char(), 'q');
    }

    #[test]
    fn plain_tile_cannot_be_assigned() {
        let mut tile = Tile::letter('A', 1);
        assert!(!tile.assign('b'));
        assert_eq!(tile.char(), 'A');
        assert!(tile.assigned_copy('b').is_none());
    }

    #[test]
    fn wildcard_rejects_non_letters() {
        let mut tile = Tile::wildcard(5);
        assert!(!tile.assign('3'));
        assert!(tile.is_free_wildcard());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Tile::letter('A', 1), Tile::letter('a', 1));
        assert_ne!(Tile::letter('A', 1), Tile::letter('A', 2));
        assert_ne!(Tile::wildcard(5), Tile::wildcard(5).assigned_copy('a').unwrap());
        assert_eq!(
            Tile::wildcard(5).assigned_copy('a'),
            Tile::wildcard(5).assigned_copy('A')
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(Tile::letter('X', 9).to_string(), "[X9]");
        assert_eq!(Tile::wildcard(5).to_string(), "[_5]");
        assert_eq!(Tile::wildcard(5).assigned_copy('a').unwrap().to_string(), "[a5]");
    }
}
