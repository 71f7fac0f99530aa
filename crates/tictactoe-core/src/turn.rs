use crate::board::{Board, Cell, Mark};

/// The mark the next accepted move will place.
///
/// Derived from the mark counts rather than stored: X opens, so equal
/// counts mean X is to move. The answer is still defined once the game is
/// over, but it no longer means anything.
pub fn derive_turn(board: &Board) -> Mark {
    if board.count(Cell::X) == board.count(Cell::O) {
        Mark::X
    } else {
        Mark::O
    }
}
