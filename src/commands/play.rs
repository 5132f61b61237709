//! Human against computer at the terminal

use super::{ConsoleHuman, GameConfig};
use crate::game::{Game, GameState, Seat, TurnError};
use crate::output::{computer_spinner, print_game_end, print_game_state, print_turn};
use crate::solver::ComputerPlayer;
use anyhow::Result;
use tracing::info;

const HUMAN: &str = "Human";
const COMPUTER: &str = "Computer";

/// Run an interactive game; the human moves first
///
/// # Errors
/// When the board cannot be loaded.
pub fn run_play(config: &GameConfig) -> Result<GameState> {
    let board = config.board.load()?;
    let dictionary = config.load_dictionary();
    let computer = ComputerPlayer::new(&dictionary).with_limits(config.limits);
    let mut game = Game::new(board, config.new_bag(), ConsoleHuman::stdio(), computer)
        .with_names(HUMAN, COMPUTER);

    println!("Welcome to SkraBBKle!");
    if config.open {
        println!("This is an open game: the computer's tiles are shown.");
    }

    while !game.state().is_over() {
        print_game_state(&game, config.open);

        let seat = game.to_move();
        let spinner = (seat == Seat::Second).then(computer_spinner);
        let result = game.play_turn();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(report) => {
                let name = if report.seat == Seat::First { HUMAN } else { COMPUTER };
                print_turn(&report, name);
            }
            Err(TurnError::Illegal(e)) => println!("Illegal move: {e}"),
            Err(TurnError::GameOver) => break,
        }

        if game.participants().0.is_closed() {
            info!("input closed; abandoning game");
            println!("Input closed; leaving the game.");
            return Ok(game.state());
        }
    }

    print_game_end(&game);
    Ok(game.state())
}
