//! Move scoring
//!
//! Scoring and placement happen in one pass: the placement's cells are walked
//! from the anchor, already occupied cells are skipped, and each newly placed
//! tile adds its (letter-premium adjusted) value to the word total while word
//! premiums multiply the total at the end.

use crate::core::{Board, Move, Placement, RACK_SIZE};

/// Flat bonus for placing a full rack in one move
pub const BINGO_BONUS: i32 = 75;

/// Outcome of laying a placement on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPlacement {
    /// Points earned, possibly negative on penalty squares
    pub points: i32,
    /// Tiles that landed on previously empty squares
    pub tiles_placed: usize,
}

impl ScoredPlacement {
    #[must_use]
    pub const fn is_bingo(&self) -> bool {
        self.tiles_placed == RACK_SIZE
    }
}

/// Place the tiles of `placement` and score them
///
/// Walks `word.len()` cells from the anchor and lays the placement's tiles on
/// the empty ones in order. Occupied and off-board cells are skipped without
/// using up a tile. Only the newly filled squares change.
///
/// # Examples
/// ```
/// use skrabbkle::core::{Axis, Board, Placement, Position, Tile};
/// use skrabbkle::scoring::apply_placement;
///
/// let mut board = Board::new(15).unwrap();
/// let tiles = vec![Tile::letter('H', 4), Tile::letter('I', 1)];
/// let hi = Placement::new("HI".into(), Position::new(8, 7), Axis::Horizontal, tiles);
///
/// let scored = apply_placement(&mut board, &hi);
/// assert_eq!(scored.points, 5);
/// assert_eq!(scored.tiles_placed, 2);
/// ```
pub fn apply_placement(board: &mut Board, placement: &Placement) -> ScoredPlacement {
    let mut tiles = placement.tiles().iter();
    let mut word_total = 0;
    let mut word_multiplier = 1;
    let mut tiles_placed = 0;

    let cells = placement.word().chars().count();
    for pos in placement.anchor().walk(placement.axis(), cells) {
        let Some(square) = board.square(pos) else {
            continue;
        };
        if square.is_occupied() {
            continue;
        }
        let premium = square.premium();
        let Some(&tile) = tiles.next() else {
            break;
        };

        if board.place_tile(pos, tile) {
            word_total += tile.value() * premium.letter_multiplier();
            word_multiplier *= premium.word_multiplier();
            tiles_placed += 1;
        }
    }

    let mut points = word_total * word_multiplier;
    if tiles_placed == RACK_SIZE {
        points += BINGO_BONUS;
    }

    ScoredPlacement {
        points,
        tiles_placed,
    }
}

/// Score a move, placing its tiles; a pass scores nothing
pub fn score(board: &mut Board, mv: &Move) -> i32 {
    match mv {
        Move::Pass => 0,
        Move::Place(placement) => apply_placement(board, placement).points,
    }
}
