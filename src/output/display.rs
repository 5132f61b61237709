//! Display functions for game state and command results

use super::formatters::{column_header, describe_move, describe_state, row_label, score_line};
use crate::commands::{AutoplaySummary, BoardReport};
use crate::core::{Board, Premium, Square};
use crate::game::{Game, Seat, TurnReport};
use crate::solver::SearchOutcome;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SCORE_WIDTH: usize = 18;

/// Board with coordinates, premiums and tiles, colored for the terminal
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(&column_header(board.size()).bright_black().to_string());
    out.push('\n');

    for (i, row) in board.rows().enumerate() {
        out.push_str(&row_label(i + 1).bright_black().to_string());
        for square in row {
            out.push_str(&paint(square).to_string());
        }
        out.push('\n');
    }
    out
}

fn paint(square: &Square) -> ColoredString {
    let text = square.to_string();
    if square.is_occupied() {
        return text.bright_white().bold();
    }
    match square.premium() {
        Premium::None => text.bright_black(),
        p if p.value() < 1 => text.red(),
        Premium::Letter(_) => text.cyan(),
        Premium::Word(_) => text.magenta(),
    }
}

/// Board and scores before a turn
///
/// In an open game the second seat's rack is shown as well.
pub fn print_game_state<A, B>(game: &Game<A, B>, open: bool) {
    println!("\n{}", render_board(game.board()));

    for seat in [Seat::First, Seat::Second] {
        let player = game.player(seat);
        println!("{}", score_line(&player.name, player.score, SCORE_WIDTH));
    }
    println!("Tiles left in bag: {}", game.bag().len());

    if open {
        let computer = game.player(Seat::Second);
        println!(
            "{} {}'s tiles: {}",
            "OPEN GAME:".yellow().bold(),
            computer.name,
            computer.rack
        );
    }

    let to_move = game.player(game.to_move());
    println!("\nIt's {}'s turn.", to_move.name.as_str().bright_cyan().bold());
}

/// One line per turn
pub fn print_turn(report: &TurnReport, name: &str) {
    let points = match report.points {
        p if p > 0 => format!("+{p}").green(),
        0 => "0".normal(),
        p => p.to_string().red(),
    };
    println!("{} {} ({} points)", name.bold(), describe_move(&report.mv), points);
    if report.mv.is_pass() {
        return;
    }
    println!("The move is:    {}", report.mv);
}

/// Final board, scores and winner
pub fn print_game_end<A, B>(game: &Game<A, B>) {
    let first = game.player(Seat::First);
    let second = game.player(Seat::Second);

    println!("\n{}", render_board(game.board()));
    println!("{}", "═".repeat(40).cyan());
    println!(" {}", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("{}", score_line(&first.name, first.score, SCORE_WIDTH));
    println!("{}", score_line(&second.name, second.score, SCORE_WIDTH));
    println!(
        "\n{}",
        describe_state(game.state(), &first.name, &second.name)
            .bright_yellow()
            .bold()
    );
}

/// Totals for a computer-only game
pub fn print_autoplay_summary(summary: &AutoplaySummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {}", "AUTOPLAY RESULT".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("   Turns:           {}", summary.turns.len());
    println!("   Placements:      {}", summary.placements());
    println!("   Tiles on board:  {}", summary.tiles_on_board);
    println!("   Time taken:      {:.2}s", summary.duration.as_secs_f64());
    println!("{}", score_line("Computer 1", summary.scores[0], SCORE_WIDTH));
    println!("{}", score_line("Computer 2", summary.scores[1], SCORE_WIDTH));
    println!(
        "\n{}",
        describe_state(summary.state, "Computer 1", "Computer 2")
            .bright_yellow()
            .bold()
    );
}

/// Layout summary for `check-board`
pub fn print_board_report(report: &BoardReport, board: &Board) {
    println!("{}", render_board(board));
    println!("{} {}x{}", "Board size:".bold(), report.size, report.size);
    println!("{} {}", "Center:".bold(), report.center);
    println!("{} {}", "Letter premiums:".bold(), report.letter_premiums);
    println!("{} {}", "Word premiums:".bold(), report.word_premiums);
    if report.penalty_squares > 0 {
        println!(
            "{} {}",
            "Penalty squares:".bold(),
            report.penalty_squares.to_string().red()
        );
    }
}

/// Result of `suggest`
pub fn print_suggestion(outcome: &SearchOutcome) {
    if outcome.chosen.is_pass() {
        let reason = if outcome.exhausted_budget {
            "candidate budget exhausted"
        } else {
            "no playable word"
        };
        println!("{} ({reason})", "Pass".yellow().bold());
    } else {
        println!(
            "{} {}",
            "Suggested move:".bright_cyan().bold(),
            outcome.chosen.notation().bright_yellow().bold()
        );
        println!("   {}", outcome.chosen);
    }
    println!("   Candidates examined: {}", outcome.examined);
}

/// Spinner shown while the computer searches
#[must_use]
pub fn computer_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("The computer is thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
