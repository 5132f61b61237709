//! Computer against computer
//!
//! Useful for exercising the search on a whole game and for reproducing
//! games from a seed.

use super::GameConfig;
use crate::core::{Board, TileBag};
use crate::game::{Game, GameState, Seat, TurnError, TurnReport};
use crate::output::{print_autoplay_summary, print_turn};
use crate::solver::{ComputerPlayer, SearchLimits};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::time::{Duration, Instant};

/// Result of a computer-only game
#[derive(Debug, Clone)]
pub struct AutoplaySummary {
    pub turns: Vec<TurnReport>,
    pub scores: [i32; 2],
    pub state: GameState,
    pub tiles_on_board: usize,
    pub duration: Duration,
}

impl AutoplaySummary {
    /// Placements made, excluding passes
    #[must_use]
    pub fn placements(&self) -> usize {
        self.turns.iter().filter(|t| !t.mv.is_pass()).count()
    }
}

/// Play two computers against each other until the game ends
///
/// # Errors
/// Only if a computer move is rejected by the game, which would mean the
/// search and the game disagree on legality.
pub fn autoplay(
    board: Board,
    bag: TileBag,
    dictionary: &Dictionary,
    limits: SearchLimits,
) -> Result<AutoplaySummary, TurnError> {
    let start = Instant::now();
    let computer = ComputerPlayer::new(dictionary).with_limits(limits);
    let mut game = Game::new(board, bag, computer, computer).with_names("Computer 1", "Computer 2");

    let mut turns = Vec::new();
    while !game.state().is_over() {
        turns.push(game.play_turn()?);
    }

    Ok(AutoplaySummary {
        turns,
        scores: [
            game.player(Seat::First).score,
            game.player(Seat::Second).score,
        ],
        state: game.state(),
        tiles_on_board: game.board().tile_count(),
        duration: start.elapsed(),
    })
}

/// Load everything from `config`, play the game and print it
///
/// # Errors
/// When the board cannot be loaded or a move is rejected.
pub fn run_autoplay(config: &GameConfig) -> Result<AutoplaySummary> {
    let board = config.board.load()?;
    let dictionary = config.load_dictionary();
    let summary = autoplay(board, config.new_bag(), &dictionary, config.limits)?;

    for report in &summary.turns {
        let name = match report.seat {
            Seat::First => "Computer 1",
            Seat::Second => "Computer 2",
        };
        print_turn(report, name);
    }
    print_autoplay_summary(&summary);
    Ok(summary)
}
