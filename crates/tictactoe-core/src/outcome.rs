use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::lines::{WinLine, WIN_LINES};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Outcome {
    InProgress,
    Won { player: Mark, line: WinLine },
    Draw,
}

impl Outcome {
    /// True once the game is decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// Classify a board. The first complete line in [`WIN_LINES`] order wins;
/// otherwise a full board is a draw.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(player) = cells[a].mark() {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Won { player, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
