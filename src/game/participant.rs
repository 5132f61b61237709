use crate::core::{Board, Move, Rack};

/// Something that can choose a move on its turn
///
/// Implementations only read the board and their own rack. The returned move
/// is validated again by the game before anything changes, so a participant
/// may return an illegal move; the game rejects it without side effects.
pub trait Participant {
    fn take_turn(&mut self, board: &Board, rack: &Rack) -> Move;
}

impl<P: Participant + ?Sized> Participant for &mut P {
    fn take_turn(&mut self, board: &Board, rack: &Rack) -> Move {
        (**self).take_turn(board, rack)
    }
}

impl<P: Participant + ?Sized> Participant for Box<P> {
    fn take_turn(&mut self, board: &Board, rack: &Rack) -> Move {
        (**self).take_turn(board, rack)
    }
}
