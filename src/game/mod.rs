//! Turn orchestration
//!
//! A [`Game`] owns the board, the bag and both seats. Each call to
//! [`Game::play_turn`] asks the seat to move for a [`Move`], re-checks it
//! against the rack and the board, applies it, refills the rack and decides
//! whether the game is over.

mod participant;
mod player;

pub use participant::Participant;
pub use player::Player;

use crate::core::{Board, IllegalMove, Move, TileBag};
use crate::scoring::apply_placement;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Passes in a row, counted across both seats, that end the game
pub const MAX_CONSECUTIVE_PASSES: usize = 4;

/// Which of the two seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first player"),
            Self::Second => write!(f, "second player"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(Seat),
    Draw,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: Seat,
    pub mv: Move,
    pub points: i32,
    /// Tiles drawn from the bag after the move
    pub drawn: usize,
    /// State after the turn, including end-of-game penalties
    pub state: GameState,
}

#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    #[error("the game is already over")]
    GameOver,
}

/// A two-seat game
///
/// The first seat moves first. Both racks are dealt on construction, first
/// seat first.
#[derive(Debug)]
pub struct Game<A, B> {
    board: Board,
    bag: TileBag,
    players: [Player; 2],
    first: A,
    second: B,
    to_move: Seat,
    consecutive_passes: usize,
    state: GameState,
}

impl<A: Participant, B: Participant> Game<A, B> {
    pub fn new(board: Board, mut bag: TileBag, first: A, second: B) -> Self {
        let mut players = [Player::new("Player 1"), Player::new("Player 2")];
        for player in &mut players {
            player.fill_rack(&mut bag);
        }
        info!(size = board.size(), bag = bag.len(), "game started");

        Self {
            board,
            bag,
            players,
            first,
            second,
            to_move: Seat::First,
            consecutive_passes: 0,
            state: GameState::InProgress,
        }
    }

    /// Rename both seats
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.players[0].name = first.into();
        self.players[1].name = second.into();
        self
    }

    /// Play one turn for the seat to move
    ///
    /// # Errors
    /// [`TurnError::Illegal`] when the seat's move does not hold up against
    /// its rack or the board; nothing changes and the same seat is still to
    /// move. [`TurnError::GameOver`] once the game has ended.
    pub fn play_turn(&mut self) -> Result<TurnReport, TurnError> {
        if self.state.is_over() {
            return Err(TurnError::GameOver);
        }

        let seat = self.to_move;
        let rack = &self.players[seat.index()].rack;
        let proposed = match seat {
            Seat::First => self.first.take_turn(&self.board, rack),
            Seat::Second => self.second.take_turn(&self.board, rack),
        };
        let mv = proposed.request().resolve(&self.board, rack)?;

        let player = &mut self.players[seat.index()];
        let (points, drawn) = match &mv {
            Move::Pass => {
                player.passed_last_turn = true;
                self.consecutive_passes += 1;
                (0, 0)
            }
            Move::Place(placement) => {
                let open = self
                    .board
                    .open_letters(placement.anchor(), placement.axis(), placement.word());
                player
                    .rack
                    .take_word(&open)
                    .ok_or_else(|| IllegalMove::MissingTiles {
                        word: placement.word().to_string(),
                        rack: player.rack.to_string(),
                    })?;
                let scored = apply_placement(&mut self.board, placement);
                player.score += scored.points;
                player.passed_last_turn = false;
                self.consecutive_passes = 0;
                (scored.points, player.fill_rack(&mut self.bag))
            }
        };
        debug!(%seat, notation = %mv.notation(), points, drawn, "turn played");

        self.check_end();
        self.to_move = seat.other();

        Ok(TurnReport {
            seat,
            mv,
            points,
            drawn,
            state: self.state,
        })
    }

    /// Play turns until the game ends
    ///
    /// # Errors
    /// Stops at the first rejected move.
    pub fn play_to_end(&mut self) -> Result<GameState, TurnError> {
        while !self.state.is_over() {
            self.play_turn()?;
        }
        Ok(self.state)
    }

    /// End when the bag is dry and a rack is empty, or after too many passes
    fn check_end(&mut self) {
        let rack_emptied = self.bag.is_empty() && self.players.iter().any(|p| p.rack.is_empty());
        if !rack_emptied && self.consecutive_passes < MAX_CONSECUTIVE_PASSES {
            return;
        }

        for player in &mut self.players {
            let penalty = player.apply_rack_penalty();
            debug!(player = %player.name, penalty, "unused tile penalty");
        }

        let [first, second] = &self.players;
        self.state = match first.score.cmp(&second.score) {
            std::cmp::Ordering::Greater => GameState::Won(Seat::First),
            std::cmp::Ordering::Less => GameState::Won(Seat::Second),
            std::cmp::Ordering::Equal => GameState::Draw,
        };
        info!(
            first = first.score,
            second = second.score,
            state = ?self.state,
            "game over"
        );
    }
}

impl<A, B> Game<A, B> {
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn bag(&self) -> &TileBag {
        &self.bag
    }

    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    #[must_use]
    pub const fn to_move(&self) -> Seat {
        self.to_move
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    /// The participants in seat order
    #[must_use]
    pub const fn participants(&self) -> (&A, &B) {
        (&self.first, &self.second)
    }
}
