//! Player tile rack and word-pattern matching
//!
//! A word pattern uses uppercase letters for plain tiles and lowercase letters
//! for wildcards. Matching walks the pattern left to right and greedily takes
//! the first eligible tile in rack order, without backtracking.

use super::{Tile, TileBag};
use std::fmt;

/// Maximum number of tiles a rack holds
pub const RACK_SIZE: usize = 7;

/// An ordered multiset of up to seven tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(RACK_SIZE),
        }
    }

    /// Build a rack from tiles, keeping at most [`RACK_SIZE`]
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().take(RACK_SIZE).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= RACK_SIZE
    }

    /// Add a tile; returns `false` if the rack is full
    pub fn add(&mut self, tile: Tile) -> bool {
        if self.is_full() {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    /// Draw from the bag until the rack is full or the bag is empty
    ///
    /// Returns the number of tiles drawn.
    pub fn refill(&mut self, bag: &mut TileBag) -> usize {
        let mut drawn = 0;
        while !self.is_full() {
            let Some(tile) = bag.draw() else { break };
            self.tiles.push(tile);
            drawn += 1;
        }
        drawn
    }

    /// Sum of the values of all tiles on the rack
    #[must_use]
    pub fn total_value(&self) -> i32 {
        self.tiles.iter().map(Tile::value).sum()
    }

    /// Whether the rack can supply every character of `pattern`
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Rack, Tile};
    ///
    /// let rack = Rack::from_tiles([Tile::letter('H', 4), Tile::wildcard(5)]);
    /// assert!(rack.can_form("HI"));  // wildcard stands in for I
    /// assert!(rack.can_form("Hi"));  // explicit wildcard
    /// assert!(!rack.can_form("HIS")); // three letters, two tiles
    /// ```
    #[must_use]
    pub fn can_form(&self, pattern: &str) -> bool {
        self.match_slots(pattern).is_some()
    }

    /// The tiles that would be played for `pattern`, aligned with it
    ///
    /// Wildcards come back as new, assigned tiles; the rack itself is not
    /// modified. Returns `None` as soon as one character cannot be matched.
    #[must_use]
    pub fn tiles_for(&self, pattern: &str) -> Option<Vec<Tile>> {
        self.match_slots(pattern)
            .map(|slots| slots.into_iter().map(|(_, tile)| tile).collect())
    }

    /// Remove the tiles for `pattern` from the rack and return them
    ///
    /// Exactly the slots chosen by [`Rack::tiles_for`] are removed. On
    /// failure the rack is left untouched.
    pub fn take_word(&mut self, pattern: &str) -> Option<Vec<Tile>> {
        let slots = self.match_slots(pattern)?;

        let mut taken: Vec<usize> = slots.iter().map(|(slot, _)| *slot).collect();
        taken.sort_unstable();
        for slot in taken.into_iter().rev() {
            self.tiles.remove(slot);
        }

        Some(slots.into_iter().map(|(_, tile)| tile).collect())
    }

    /// Match `pattern` against the rack, returning `(slot, produced tile)` pairs
    fn match_slots(&self, pattern: &str) -> Option<Vec<(usize, Tile)>> {
        if pattern.is_empty() {
            return None;
        }

        let mut used = [false; RACK_SIZE];
        let mut slots = Vec::with_capacity(pattern.len());

        for c in pattern.chars() {
            let matched = if c.is_ascii_uppercase() {
                self.find_unused(&used, |t| !t.is_wildcard() && t.char() == c)
                    .map(|slot| (slot, self.tiles[slot]))
                    .or_else(|| self.free_wildcard_as(&used, c))
            } else if c.is_ascii_lowercase() {
                self.free_wildcard_as(&used, c)
            } else {
                None
            }?;

            used[matched.0] = true;
            slots.push(matched);
        }

        Some(slots)
    }

    fn free_wildcard_as(&self, used: &[bool; RACK_SIZE], c: char) -> Option<(usize, Tile)> {
        let slot = self.find_unused(used, Tile::is_free_wildcard)?;
        self.tiles[slot].assigned_copy(c).map(|tile| (slot, tile))
    }

    fn find_unused(&self, used: &[bool; RACK_SIZE], pred: impl Fn(&Tile) -> bool) -> Option<usize> {
        self.tiles
            .iter()
            .enumerate()
            .find(|&(i, t)| !used[i] && pred(t))
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}
