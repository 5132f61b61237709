//! Board squares and their premiums

use super::Tile;
use std::fmt;

/// Premium class of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Premium {
    /// Standard square
    #[default]
    None,
    /// Multiplies the value of the tile placed on it
    Letter(i32),
    /// Multiplies the value of the whole word
    Word(i32),
}

impl Premium {
    /// Multiplier carried by the premium (1 for a standard square)
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::None => 1,
            Self::Letter(v) | Self::Word(v) => v,
        }
    }

    /// Factor applied to a tile placed here
    #[must_use]
    pub const fn letter_multiplier(self) -> i32 {
        match self {
            Self::Letter(v) => v,
            _ => 1,
        }
    }

    /// Factor applied to the word when a tile is placed here
    #[must_use]
    pub const fn word_multiplier(self) -> i32 {
        match self {
            Self::Word(v) => v,
            _ => 1,
        }
    }
}

/// One cell of the board
///
/// Once a tile is placed the square stays occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    premium: Premium,
    tile: Option<Tile>,
}

impl Square {
    #[must_use]
    pub const fn new(premium: Premium) -> Self {
        Self {
            premium,
            tile: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn premium(&self) -> Premium {
        self.premium
    }

    #[inline]
    #[must_use]
    pub const fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }

    /// Put a tile on the square; fails if it is already occupied
    pub fn place(&mut self, tile: Tile) -> bool {
        if self.is_occupied() {
            return false;
        }
        self.tile = Some(tile);
        true
    }
}

impl fmt::Display for Square {
    /// Three-column cell text: `H4`, ` . `, `(2)`, `{3}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tile) = &self.tile {
            return write!(f, "{:<3}", format!("{}{}", tile.char(), tile.value()));
        }
        match self.premium {
            Premium::None => write!(f, " . "),
            Premium::Letter(v) if (0..10).contains(&v) => write!(f, "({v})"),
            Premium::Letter(v) => write!(f, "({v}"),
            Premium::Word(v) if (0..10).contains(&v) => write!(f, "{{{v}}}"),
            Premium::Word(v) => write!(f, "{{{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_multipliers() {
        assert_eq!(Premium::None.value(), 1);
        assert_eq!(Premium::Letter(3).letter_multiplier(), 3);
        assert_eq!(Premium::Letter(3).word_multiplier(), 1);
        assert_eq!(Premium::Word(-2).word_multiplier(), -2);
        assert_eq!(Premium::Word(-2).letter_multiplier(), 1);
    }

    #[test]
    fn occupancy_is_monotonic() {
        let mut sq = Square::new(Premium::Word(2));
        assert!(!sq.is_occupied());
        assert!(sq.place(Tile::letter('A', 1)));
        assert!(sq.is_occupied());
        assert!(!sq.place(Tile::letter('B', 3)));
        assert_eq!(sq.tile(), Some(&Tile::letter('A', 1)));
    }

    #[test]
    fn display_cells() {
        assert_eq!(Square::default().to_string(), " . ");
        assert_eq!(Square::new(Premium::Letter(2)).to_string(), "(2)");
        assert_eq!(Square::new(Premium::Word(3)).to_string(), "{3}");
        assert_eq!(Square::new(Premium::Word(12)).to_string(), "{12");
        assert_eq!(Square::new(Premium::Letter(-4)).to_string(), "(-4");

        let mut sq = Square::default();
        sq.place(Tile::letter('Q', 12));
        assert_eq!(sq.to_string(), "Q12");
    }
}
