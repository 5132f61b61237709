//! Computer move search
//!
//! Candidates are tried in a fixed priority order: more tiles before fewer,
//! earlier rack subsets before later ones, earlier permutations before later
//! ones, and for each word the board cells row-major with horizontal before
//! vertical. The first legal triple wins. Each tier is searched in parallel
//! with `find_map_first`, which still returns the earliest match in that
//! order, so the chosen move never depends on thread scheduling.

use super::candidates::candidate_words;
use crate::core::{Axis, Board, Move, Placement, Position, RACK_SIZE, Rack};
use crate::game::Participant;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use tracing::debug;

/// Smallest word the computer may open with
const OPENING_MIN_TILES: usize = 2;

/// Bounds on how much work one search may do
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of distinct candidate words examined per turn
    ///
    /// `None` searches the whole candidate space. When the cap is reached
    /// without a match the search resolves to a pass.
    pub max_candidates: Option<usize>,
}

/// Result of one search, with bookkeeping for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub chosen: Move,
    /// Candidate words handed to the search, across all tiers tried
    pub examined: usize,
    /// The candidate cap was hit before a move was found
    pub exhausted_budget: bool,
}

/// Automated participant that plays the first legal move it finds
///
/// # Examples
/// ```
/// use skrabbkle::core::{Board, Rack, Tile};
/// use skrabbkle::solver::ComputerPlayer;
/// use skrabbkle::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["HI"]);
/// let computer = ComputerPlayer::new(&dictionary);
/// let board = Board::new(15).unwrap();
/// let rack = Rack::from_tiles([Tile::letter('H', 4), Tile::letter('I', 1), Tile::wildcard(5)]);
///
/// let mv = computer.find_move(&board, &rack);
/// assert_eq!(mv.notation(), "HI,8h");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComputerPlayer<'d> {
    dictionary: &'d Dictionary,
    limits: SearchLimits,
}

impl<'d> ComputerPlayer<'d> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            limits: SearchLimits::default(),
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The move this player would make, or a pass
    #[must_use]
    pub fn find_move(&self, board: &Board, rack: &Rack) -> Move {
        self.search(board, rack).chosen
    }

    /// Run the search and report how far it got
    #[must_use]
    pub fn search(&self, board: &Board, rack: &Rack) -> SearchOutcome {
        let opening = board.is_empty();
        let min_tiles = if opening { OPENING_MIN_TILES } else { 1 };
        let max_tiles = rack.len().min(RACK_SIZE);

        let mut budget = self.limits.max_candidates;
        let mut examined = 0;

        for size in (min_tiles..=max_tiles).rev() {
            let mut words: Vec<String> = candidate_words(rack.tiles(), size, size).collect();
            let mut truncated = false;
            if let Some(remaining) = budget {
                if words.len() > remaining {
                    words.truncate(remaining);
                    truncated = true;
                }
                budget = Some(remaining - words.len());
            }
            examined += words.len();

            debug!(tiles = size, candidates = words.len(), opening, "searching tier");

            let found = words.par_iter().find_map_first(|word| {
                if opening {
                    self.opening_placement(board, rack, word)
                } else {
                    self.connected_placement(board, rack, word)
                }
            });

            if let Some(placement) = found {
                debug!(notation = %placement.notation(), examined, "computer chose a move");
                return SearchOutcome {
                    chosen: Move::Place(placement),
                    examined,
                    exhausted_budget: false,
                };
            }

            if truncated || budget == Some(0) {
                debug!(examined, "candidate budget exhausted; passing");
                return SearchOutcome {
                    chosen: Move::Pass,
                    examined,
                    exhausted_budget: true,
                };
            }
        }

        debug!(examined, "no legal move; passing");
        SearchOutcome {
            chosen: Move::Pass,
            examined,
            exhausted_budget: false,
        }
    }

    /// Opening play through the center, horizontal first
    fn opening_placement(&self, board: &Board, rack: &Rack, word: &str) -> Option<Placement> {
        if !self.dictionary.contains(word) {
            return None;
        }
        let tiles = rack.tiles_for(word)?;
        let len = word.chars().count();

        Axis::ALL.into_iter().find_map(|axis| {
            let anchor = find_start(board, board.center(), len, axis)?;
            Some(Placement::new(word.to_string(), anchor, axis, tiles.clone()))
        })
    }

    /// Row-major scan for a placement touching existing tiles
    ///
    /// The rack only pays for the cells the word does not share with the
    /// board, and at least one such cell is required.
    fn connected_placement(&self, board: &Board, rack: &Rack, word: &str) -> Option<Placement> {
        if !self.dictionary.contains(word) {
            return None;
        }
        let len = word.chars().count();
        let size = board.size() as i32;

        (1..=size)
            .flat_map(|row| (0..size).map(move |column| Position::new(row, column)))
            .flat_map(|anchor| Axis::ALL.into_iter().map(move |axis| (anchor, axis)))
            .filter(|&(anchor, axis)| {
                board.fits(anchor, axis, len) && board.is_legal(anchor, axis, word)
            })
            .find_map(|(anchor, axis)| {
                let tiles = rack.tiles_for(&board.open_letters(anchor, axis, word))?;
                Some(Placement::new(word.to_string(), anchor, axis, tiles))
            })
    }
}

/// First anchor placing `center` inside a `len`-cell word that stays on the board
///
/// Offsets are tried from zero upward, so the center is as close to the start
/// of the word as the board edge allows.
fn find_start(board: &Board, center: Position, len: usize, axis: Axis) -> Option<Position> {
    (0..len as i32)
        .map(|i| center.offset(axis, -i))
        .find(|&anchor| board.fits(anchor, axis, len))
}

impl Participant for ComputerPlayer<'_> {
    fn take_turn(&mut self, board: &Board, rack: &Rack) -> Move {
        self.find_move(board, rack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use crate::scoring::apply_placement;

    fn rack(letters: &str) -> Rack {
        Rack::from_tiles(letters.chars().map(|c| {
            if c == '_' {
                Tile::wildcard(5)
            } else {
                Tile::letter(c, 1)
            }
        }))
    }

    fn place_word(board: &mut Board, notation: &str) {
        let letters = notation.split(',').next().unwrap();
        let mv = crate::core::MoveRequest::parse(notation)
            .unwrap()
            .resolve(board, &rack(letters))
            .unwrap();
        let Move::Place(placement) = mv else {
            panic!("expected a placement");
        };
        apply_placement(board, &placement);
    }

    #[test]
    fn opening_passes_through_center() {
        let dictionary = Dictionary::from_words(["HI"]);
        let board = Board::new(15).unwrap();
        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("HI_"));

        let Move::Place(placement) = mv else {
            panic!("expected a placement, got {mv}");
        };
        assert_eq!(placement.word(), "HI");
        assert_eq!(placement.tiles().len(), 2);
        assert_eq!(placement.axis(), Axis::Horizontal);
        assert_eq!(placement.anchor(), board.center());
    }

    #[test]
    fn prefers_more_tiles() {
        let dictionary = Dictionary::from_words(["AT", "CAT", "ACT"]);
        let board = Board::new(15).unwrap();
        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("CAT"));
        assert_eq!(mv.notation(), "CAT,8h");
    }

    #[test]
    fn opening_never_plays_a_single_tile() {
        let dictionary = Dictionary::from_words(["A"]);
        let board = Board::new(15).unwrap();
        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("AB"));
        assert!(mv.is_pass());
    }

    #[test]
    fn opening_shifts_back_from_edge() {
        let dictionary = Dictionary::from_words(["ABCDEFG"]);
        let board = Board::new(11).unwrap();
        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("ABCDEFG"));
        let Move::Place(placement) = mv else {
            panic!("expected a placement");
        };
        // Center of 11 is f6; seven cells from there would run off the edge
        assert_eq!(placement.anchor(), Position::new(6, 4));
        assert!(board.fits(placement.anchor(), placement.axis(), 7));
    }

    #[test]
    fn empty_dictionary_always_passes() {
        let dictionary = Dictionary::new();
        let board = Board::new(15).unwrap();
        let outcome = ComputerPlayer::new(&dictionary).search(&board, &rack("ABCDEFG"));
        assert!(outcome.chosen.is_pass());
        assert!(!outcome.exhausted_budget);
    }

    #[test]
    fn wildcards_are_never_played() {
        let dictionary = Dictionary::from_words(["HA", "HI"]);
        let board = Board::new(15).unwrap();
        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("H_"));
        assert!(mv.is_pass());
    }

    #[test]
    fn later_moves_connect_to_existing_tiles() {
        let dictionary = Dictionary::from_words(["AT"]);
        let mut board = Board::new(15).unwrap();
        place_word(&mut board, "CAT,8h");

        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("AT"));
        let Move::Place(placement) = mv else {
            panic!("expected a placement");
        };
        // Row 7 above CAT is the first row whose cells touch it
        assert_eq!(placement.anchor().row(), 7);
        assert!(board.is_legal(placement.anchor(), placement.axis(), "AT"));
    }

    #[test]
    fn later_moves_may_use_one_tile() {
        let dictionary = Dictionary::from_words(["A"]);
        let mut board = Board::new(15).unwrap();
        place_word(&mut board, "CAT,8h");

        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("A"));
        assert_eq!(mv.tile_count(), 1);
    }

    #[test]
    fn budget_exhaustion_passes() {
        let dictionary = Dictionary::from_words(["BA"]);
        let board = Board::new(15).unwrap();
        let limits = SearchLimits {
            max_candidates: Some(1),
        };
        let outcome = ComputerPlayer::new(&dictionary)
            .with_limits(limits)
            .search(&board, &rack("AB"));
        // Only "AB" is examined, "BA" would have matched next
        assert!(outcome.chosen.is_pass());
        assert!(outcome.exhausted_budget);
        assert_eq!(outcome.examined, 1);
    }

    #[test]
    fn generous_budget_matches_unbounded_search() {
        let dictionary = Dictionary::from_words(["BA", "TAB"]);
        let board = Board::new(15).unwrap();
        let computer = ComputerPlayer::new(&dictionary);
        let bounded = computer.with_limits(SearchLimits {
            max_candidates: Some(10_000),
        });
        assert_eq!(
            computer.find_move(&board, &rack("TAB")),
            bounded.find_move(&board, &rack("TAB"))
        );
    }

    #[test]
    fn search_is_deterministic() {
        let dictionary = Dictionary::from_words(["RATE", "TEAR", "TARE", "EAT", "TEA", "ATE"]);
        let mut board = Board::new(15).unwrap();
        place_word(&mut board, "CAT,8h");
        let computer = ComputerPlayer::new(&dictionary);

        let first = computer.find_move(&board, &rack("RATEX"));
        for _ in 0..5 {
            assert_eq!(computer.find_move(&board, &rack("RATEX")), first);
        }
    }

    /// Plain nested loops over the same priority order, no rayon
    fn first_legal_in_order(dictionary: &Dictionary, board: &Board, rack: &Rack) -> Move {
        let size = board.size() as i32;
        for size_of_word in (1..=rack.len()).rev() {
            for word in candidate_words(rack.tiles(), size_of_word, size_of_word) {
                if !dictionary.contains(&word) {
                    continue;
                }
                for row in 1..=size {
                    for column in 0..size {
                        for axis in Axis::ALL {
                            let anchor = Position::new(row, column);
                            if !board.fits(anchor, axis, word.len())
                                || !board.is_legal(anchor, axis, &word)
                            {
                                continue;
                            }
                            let open = board.open_letters(anchor, axis, &word);
                            if let Some(tiles) = rack.tiles_for(&open) {
                                return Move::Place(Placement::new(word, anchor, axis, tiles));
                            }
                        }
                    }
                }
            }
        }
        Move::Pass
    }

    #[test]
    fn parallel_search_picks_earliest_candidate() {
        // RATE, TARE and TEAR are all playable; RATE is the first
        // permutation of the first four-tile subset
        let dictionary = Dictionary::from_words(["TEAR", "TARE", "RATE", "EAT", "TEA"]);
        let mut board = Board::new(15).unwrap();
        place_word(&mut board, "CAT,8h");
        let rack = rack("RATEX");

        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack);
        assert_eq!(mv, first_legal_in_order(&dictionary, &board, &rack));
        // g5 down to g8 is the first row-major cell whose span touches CAT
        assert_eq!(mv.notation(), "RATE,g5");
    }

    #[test]
    fn crossing_play_pays_only_for_new_cells() {
        let dictionary = Dictionary::from_words(["ARC"]);
        let mut board = Board::new(15).unwrap();
        for (column, c) in (0..).zip("CAT".chars()) {
            board.place_tile(Position::new(8, column), Tile::letter(c, 1));
        }

        let mv = ComputerPlayer::new(&dictionary).find_move(&board, &rack("ARC"));
        assert_eq!(mv, first_legal_in_order(&dictionary, &board, &rack("ARC")));
        // Down column a, ending on the C already at a8
        assert_eq!(mv.notation(), "ARC,a6");
        assert_eq!(mv.tile_count(), 2);

        let Move::Place(placement) = mv else {
            panic!("expected a placement");
        };
        assert_eq!(apply_placement(&mut board, &placement).tiles_placed, 2);
        assert_eq!(board.tile_count(), 5);
    }

    #[test]
    fn find_start_keeps_word_on_board() {
        let board = Board::new(15).unwrap();
        let center = board.center();
        assert_eq!(find_start(&board, center, 3, Axis::Vertical), Some(center));

        let corner = Position::new(15, 14);
        assert_eq!(
            find_start(&board, corner, 3, Axis::Horizontal),
            Some(Position::new(15, 12))
        );
    }
}
