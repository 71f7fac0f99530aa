use tictactoe_core::{Board, Cell, Mark, Outcome, Session, CELL_COUNT};
use tracing::debug;

use crate::config::DisplayConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
}

pub struct Game {
    pub session: Session,
    pub selected_row: usize,
    pub selected_col: usize,
    pub state: GameState,
    pub show_quit_confirm: bool,
    pub display: DisplayConfig,
}

impl Game {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            session: Session::new(),
            selected_row: 1,
            selected_col: 1,
            state: GameState::Menu,
            show_quit_confirm: false,
            display,
        }
    }

    pub fn start_new_game(&mut self) {
        self.session.reset();
        self.selected_row = 1;
        self.selected_col = 1;
        self.state = GameState::Playing;
        self.show_quit_confirm = false;
    }

    pub fn move_cursor(&mut self, dr: i32, dc: i32) {
        self.selected_row = (self.selected_row as i32 + dr).rem_euclid(3) as usize;
        self.selected_col = (self.selected_col as i32 + dc).rem_euclid(3) as usize;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_row * 3 + self.selected_col
    }

    pub fn play_selected(&mut self) {
        self.play_at(self.selected_index());
    }

    /// Rejected moves are dropped without feedback; only the log sees them.
    pub fn play_at(&mut self, index: usize) {
        if self.state != GameState::Playing {
            return;
        }
        if index < CELL_COUNT {
            self.selected_row = index / 3;
            self.selected_col = index % 3;
        }
        if let Err(err) = self.session.play(index) {
            debug!(index, error = %err, "ignoring move");
        }
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.state == GameState::Playing && self.outcome().is_over()
    }

    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::X => self.display.x_symbol,
            Mark::O => self.display.o_symbol,
        }
    }

    /// Text shown in a cell, before styling.
    pub fn cell_label(&self, index: usize) -> String {
        match self.board().cells()[index] {
            Cell::X => self.symbol(Mark::X).to_string(),
            Cell::O => self.symbol(Mark::O).to_string(),
            Cell::Empty if self.display.show_indices => (index + 1).to_string(),
            Cell::Empty => " ".to_string(),
        }
    }

    pub fn in_winning_line(&self, index: usize) -> bool {
        self.display.highlight_winning_line
            && self
                .outcome()
                .winning_line()
                .is_some_and(|line| line.contains(&index))
    }

    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("{} to move", self.symbol(self.session.turn())),
            Outcome::Won { player, .. } => format!("{} wins!", self.symbol(player)),
            Outcome::Draw => "Draw".to_string(),
        }
    }
}
