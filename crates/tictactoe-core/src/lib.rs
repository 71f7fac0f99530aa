pub mod board;
pub mod lines;
pub mod moves;
pub mod outcome;
pub mod session;
pub mod turn;

pub use board::{Board, Cell, Mark, ParseBoardError, CELL_COUNT};
pub use lines::{WinLine, WIN_LINES};
pub use moves::{apply_move, reset, MoveError};
pub use outcome::{evaluate_outcome, Outcome};
pub use session::Session;
pub use turn::derive_turn;
