use tracing::{debug, info, instrument};

use crate::board::{Board, Mark};
use crate::moves::{self, apply_move, MoveError};
use crate::outcome::{evaluate_outcome, Outcome};
use crate::turn::derive_turn;

/// Owns the board of the game being played.
///
/// The board is the only state. Outcome and turn are recomputed from it on
/// every call, so they cannot drift out of step with the cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    board: Board,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing board.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    pub fn turn(&self) -> Mark {
        derive_turn(&self.board)
    }

    /// Play the current turn at `index`.
    ///
    /// On success the board is replaced and the new outcome returned. On
    /// rejection the board is left exactly as it was; frontends are
    /// expected to ignore the error.
    #[instrument(skip(self), fields(turn = %self.turn()))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        match apply_move(&self.board, index) {
            Ok(board) => {
                self.board = board;
                let outcome = self.outcome();
                debug!(board = %self.board, "move accepted");
                match outcome {
                    Outcome::Won { player, line } => info!(%player, ?line, "game won"),
                    Outcome::Draw => info!("game drawn"),
                    Outcome::InProgress => {}
                }
                Ok(outcome)
            }
            Err(err) => {
                debug!(error = %err, "move rejected");
                Err(err)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = moves::reset();
        debug!("board reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn plays_alternate() {
        let mut session = Session::new();
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.play(0), Ok(Outcome::InProgress));
        assert_eq!(session.turn(), Mark::O);
        assert_eq!(session.play(4), Ok(Outcome::InProgress));
        assert_eq!(session.board().get(0), Some(Cell::X));
        assert_eq!(session.board().get(4), Some(Cell::O));
        assert_eq!(session.turn(), Mark::X);
    }

    #[test]
    fn rejected_move_keeps_board() {
        let mut session = Session::new();
        session.play(0).unwrap();
        let before = *session.board();
        assert_eq!(session.play(0), Err(MoveError::CellOccupied { index: 0 }));
        assert_eq!(session.board(), &before);
        assert_eq!(session.turn(), Mark::O);
    }

    #[test]
    fn win_then_further_moves_ignored() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4] {
            assert_eq!(session.play(index), Ok(Outcome::InProgress));
        }
        assert_eq!(
            session.play(2),
            Ok(Outcome::Won {
                player: Mark::X,
                line: [0, 1, 2]
            })
        );
        let finished = *session.board();
        assert_eq!(session.play(8), Err(MoveError::GameAlreadyOver));
        assert_eq!(session.board(), &finished);
    }

    #[test]
    fn full_game_to_draw() {
        let mut session = Session::new();
        // X O X / X O O / O X X
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut last = Outcome::InProgress;
        for index in moves {
            last = session.play(index).unwrap();
        }
        assert_eq!(last, Outcome::Draw);
        assert_eq!(session.board().to_string(), "XOX\nXOO\nOXX");
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::from_board("XXX.OO...".parse().unwrap());
        assert!(session.outcome().is_over());
        session.reset();
        assert_eq!(session, Session::new());
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.turn(), Mark::X);
    }
}
