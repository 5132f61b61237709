//! One-off move suggestion for a given rack

use crate::core::{Board, DISTRIBUTION, RACK_SIZE, Rack, Tile, UNASSIGNED, WILDCARD_VALUE};
use crate::solver::{ComputerPlayer, SearchLimits, SearchOutcome};
use crate::wordlists::Dictionary;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackParseError {
    #[error("rack is empty")]
    Empty,

    #[error("a rack holds at most 7 tiles, got {0}")]
    TooMany(usize),

    #[error("'{0}' is not a tile; use letters, or '_' for a wildcard")]
    InvalidTile(char),
}

/// Build a rack from letters, `_` standing for a wildcard
///
/// Tiles take their standard values.
///
/// # Errors
/// When the text is empty, too long, or holds anything but letters and `_`.
///
/// # Examples
/// ```
/// use skrabbkle::commands::suggest::parse_rack;
///
/// let rack = parse_rack("qi_").unwrap();
/// assert_eq!(rack.to_string(), "[Q12], [I1], [_5]");
/// ```
pub fn parse_rack(letters: &str) -> Result<Rack, RackParseError> {
    let letters = letters.trim();
    if letters.is_empty() {
        return Err(RackParseError::Empty);
    }
    let count = letters.chars().count();
    if count > RACK_SIZE {
        return Err(RackParseError::TooMany(count));
    }

    let tiles = letters
        .chars()
        .map(|c| {
            if c == UNASSIGNED {
                return Ok(Tile::wildcard(WILDCARD_VALUE));
            }
            let upper = c.to_ascii_uppercase();
            DISTRIBUTION
                .iter()
                .find(|&&(letter, _, _)| letter == upper)
                .map(|&(letter, _, value)| Tile::letter(letter, value))
                .ok_or(RackParseError::InvalidTile(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Rack::from_tiles(tiles))
}

/// What the computer would play with `rack` on `board`
#[must_use]
pub fn suggest(board: &Board, rack: &Rack, dictionary: &Dictionary, limits: SearchLimits) -> SearchOutcome {
    ComputerPlayer::new(dictionary).with_limits(limits).search(board, rack)
}
