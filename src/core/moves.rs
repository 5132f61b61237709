//! Moves and the `word,square` move notation
//!
//! Notation grammar:
//! - `","` is a pass
//! - `WORD,f4` (column letter then row) plays down the column
//! - `WORD,4f` (row then column letter) plays along the row
//!
//! In the word, uppercase letters ask for plain tiles and lowercase letters
//! ask for wildcards.

use super::{Axis, Board, Position, Rack, Tile};
use std::fmt;
use thiserror::Error;

/// Move string does not follow the notation grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty move")]
    Empty,

    #[error("expected \"word,square\" with exactly one comma")]
    MissingSeparator,

    #[error("word must be non-empty and contain only letters, got '{0}'")]
    InvalidWord(String),

    #[error("square must be a column letter and row number like f4 or 4f, got '{0}'")]
    InvalidSquare(String),
}

/// A well-formed move that cannot be played right now
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("square {square} is not on the board")]
    OffBoard { square: String },

    #[error("with tiles {rack} you cannot play word {word}")]
    MissingTiles { word: String, rack: String },

    #[error("the board does not permit word {word} at position {anchor}")]
    Rejected { word: String, anchor: Position },
}

/// A parsed move string, not yet checked against rack or board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    Pass,
    Place {
        word: String,
        anchor: Position,
        axis: Axis,
    },
}

impl MoveRequest {
    /// Parse move notation
    ///
    /// # Errors
    /// Returns a `NotationError` describing the first grammar violation.
    ///
    /// # Examples
    /// ```
    /// use skrabbkle::core::{Axis, MoveRequest, Position};
    ///
    /// let down = MoveRequest::parse("HI,f4").unwrap();
    /// assert_eq!(
    ///     down,
    ///     MoveRequest::Place {
    ///         word: "HI".to_string(),
    ///         anchor: Position::new(4, 5),
    ///         axis: Axis::Vertical,
    ///     }
    /// );
    ///
    /// assert_eq!(MoveRequest::parse(",").unwrap(), MoveRequest::Pass);
    /// assert!(MoveRequest::parse("HI,ff").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, NotationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(NotationError::Empty);
        }
        if input == "," {
            return Ok(Self::Pass);
        }

        let (word, square) = input
            .split_once(',')
            .filter(|(_, rest)| !rest.contains(','))
            .ok_or(NotationError::MissingSeparator)?;

        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NotationError::InvalidWord(word.to_string()));
        }

        let (anchor, axis) =
            parse_square(square).ok_or_else(|| NotationError::InvalidSquare(square.to_string()))?;

        Ok(Self::Place {
            word: word.to_string(),
            anchor,
            axis,
        })
    }

    /// Check the request against the rack and the board and attach tiles
    ///
    /// The anchor must be on the board, the rack must supply every letter
    /// that lands on an empty cell, the word must lie on the board, and the
    /// board must accept the placement. Cells that already hold a tile keep
    /// it and cost the rack nothing.
    ///
    /// # Errors
    /// Returns the `IllegalMove` reason; nothing is modified either way.
    pub fn resolve(&self, board: &Board, rack: &Rack) -> Result<Move, IllegalMove> {
        let Self::Place { word, anchor, axis } = self else {
            return Ok(Move::Pass);
        };

        if !board.contains(*anchor) {
            return Err(IllegalMove::OffBoard {
                square: anchor.to_string(),
            });
        }

        let rejected = || IllegalMove::Rejected {
            word: word.clone(),
            anchor: *anchor,
        };

        let open = board.open_letters(*anchor, *axis, word);
        if open.is_empty() {
            return Err(rejected());
        }
        let tiles = rack.tiles_for(&open).ok_or_else(|| IllegalMove::MissingTiles {
            word: word.clone(),
            rack: rack.to_string(),
        })?;

        if !board.fits(*anchor, *axis, word.len()) || !board.is_legal(*anchor, *axis, word) {
            return Err(rejected());
        }

        Ok(Move::Place(Placement::new(word.clone(), *anchor, *axis, tiles)))
    }
}

/// A turn's action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Pass,
    Place(Placement),
}

impl Move {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Tiles this move takes from the rack
    #[must_use]
    pub fn tile_count(&self) -> usize {
        match self {
            Self::Pass => 0,
            Self::Place(p) => p.tiles().len(),
        }
    }

    /// Serialize back to move notation
    #[must_use]
    pub fn notation(&self) -> String {
        match self {
            Self::Pass => ",".to_string(),
            Self::Place(p) => p.notation(),
        }
    }

    /// Strip the tiles, leaving the request this move answers
    #[must_use]
    pub fn request(&self) -> MoveRequest {
        match self {
            Self::Pass => MoveRequest::Pass,
            Self::Place(p) => MoveRequest::Place {
                word: p.word.clone(),
                anchor: p.anchor,
                axis: p.axis,
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Place(p) => write!(f, "Word: {} at position {}", p.word, p.anchor),
        }
    }
}

/// A word laid from an anchor along an axis, with the tiles that spell it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    anchor: Position,
    axis: Axis,
    tiles: Vec<Tile>,
}

impl Placement {
    #[must_use]
    pub const fn new(word: String, anchor: Position, axis: Axis, tiles: Vec<Tile>) -> Self {
        Self {
            word,
            anchor,
            axis,
            tiles,
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Tiles for the word's empty cells, in word order
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Move notation for this placement
    #[must_use]
    pub fn notation(&self) -> String {
        let column = self.anchor.column_letter().unwrap_or('?');
        let row = self.anchor.row();
        match self.axis {
            Axis::Vertical => format!("{},{column}{row}", self.word),
            Axis::Horizontal => format!("{},{row}{column}", self.word),
        }
    }
}

/// `f4` -> vertical at row 4 column f; `4f` -> horizontal
fn parse_square(square: &str) -> Option<(Position, Axis)> {
    let first = square.chars().next()?;
    let last = square.chars().last()?;
    if square.len() < 2 {
        return None;
    }

    let (letter, digits, axis) = if first.is_ascii_alphabetic() {
        (first, &square[1..], Axis::Vertical)
    } else if first.is_ascii_digit() && last.is_ascii_alphabetic() {
        (last, &square[..square.len() - 1], Axis::Horizontal)
    } else {
        return None;
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let row: i32 = digits.parse().ok()?;
    let column = i32::from(letter.to_ascii_lowercase() as u8 - b'a');

    Some((Position::new(row, column), axis))
}
