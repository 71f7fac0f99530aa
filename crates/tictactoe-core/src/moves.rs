use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::board::{Board, CELL_COUNT};
use crate::outcome::evaluate_outcome;
use crate::turn::derive_turn;

/// Why a move was rejected. A rejected move never changes the board.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    #[display("cell {index} is already occupied")]
    CellOccupied { index: usize },
    #[display("the game is already over")]
    GameAlreadyOver,
    #[display("cell index {index} is outside 0..=8")]
    InvalidIndex { index: usize },
}

impl MoveError {
    /// `InvalidIndex` means the caller offered a cell that does not exist.
    /// The other two are ordinary game situations.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, MoveError::InvalidIndex { .. })
    }
}

/// Place the current player's mark at `index`, returning the new board.
///
/// Checks in order: the index exists, the game is still in progress, the
/// cell is empty. `board` itself is never modified.
pub fn apply_move(board: &Board, index: usize) -> Result<Board, MoveError> {
    if index >= CELL_COUNT {
        return Err(MoveError::InvalidIndex { index });
    }
    if evaluate_outcome(board).is_over() {
        return Err(MoveError::GameAlreadyOver);
    }
    if !board.cells()[index].is_empty() {
        return Err(MoveError::CellOccupied { index });
    }

    let mark = derive_turn(board);
    Ok(board.with_cell(index, mark.into()))
}

/// A fresh empty board.
pub fn reset() -> Board {
    Board::new()
}
