//! The tile bag
//!
//! Holds the undrawn tiles in a fixed shuffled order.

use super::Tile;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Value of each wildcard tile
pub const WILDCARD_VALUE: i32 = 5;

/// Number of wildcards in a standard bag
pub const WILDCARD_COUNT: usize = 2;

/// Standard letter distribution as `(letter, quantity, value)`
pub const DISTRIBUTION: [(char, usize, i32); 26] = [
    ('A', 8, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 10, 1),
    ('F', 3, 4),
    ('G', 4, 2),
    ('H', 3, 4),
    ('I', 8, 1),
    ('J', 1, 9),
    ('K', 1, 6),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 7, 1),
    ('O', 7, 1),
    ('P', 2, 3),
    ('Q', 1, 12),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 5, 1),
    ('V', 2, 4),
    ('W', 1, 4),
    ('X', 1, 9),
    ('Y', 2, 5),
    ('Z', 1, 11),
];

/// Bag of undrawn tiles, drawn from the front
#[derive(Debug, Clone, Default)]
pub struct TileBag {
    tiles: VecDeque<Tile>,
}

impl TileBag {
    /// Standard bag shuffled with the given random source
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = standard_tiles();
        tiles.shuffle(rng);
        Self {
            tiles: tiles.into(),
        }
    }

    /// Standard bag with a reproducible order
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::standard(&mut StdRng::seed_from_u64(seed))
    }

    /// Bag with exactly these tiles, drawn in the given order
    #[must_use]
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Take the next tile, if any remain
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
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
}

/// Every tile of a standard set, unshuffled
#[must_use]
pub fn standard_tiles() -> Vec<Tile> {
    let mut tiles: Vec<Tile> = DISTRIBUTION
        .iter()
        .flat_map(|&(letter, quantity, value)| {
            std::iter::repeat_n(Tile::letter(letter, value), quantity)
        })
        .collect();
    tiles.extend(std::iter::repeat_n(
        Tile::wildcard(WILDCARD_VALUE),
        WILDCARD_COUNT,
    ));
    tiles
}
