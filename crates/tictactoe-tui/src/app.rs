use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::Config;
use crate::game::{Game, GameState};
use crate::ui;

pub fn run(config: Config) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run(config))
}

async fn async_run(config: Config) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new(config.display);
    let result = run_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("terminal restored");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if handle_key(game, key) {
                            return Ok(());
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }
    }
}

/// Returns true when the app should exit.
fn handle_key(game: &mut Game, key: KeyEvent) -> bool {
    match game.state {
        GameState::Menu => handle_menu_key(game, key),
        GameState::Playing => handle_playing_key(game, key),
    }
}

fn handle_menu_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            info!("starting game");
            game.start_new_game();
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> bool {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => game.show_quit_confirm = false,
        }
        return false;
    }

    if game.is_finished() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => game.start_new_game(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                game.show_quit_confirm = true
            }
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Up => game.move_cursor(-1, 0),
        KeyCode::Down => game.move_cursor(1, 0),
        KeyCode::Left => game.move_cursor(0, -1),
        KeyCode::Right => game.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => game.play_selected(),
        KeyCode::Char(c @ '1'..='9') => game.play_at(c as usize - '1' as usize),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            debug!("restart requested");
            game.start_new_game();
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => game.show_quit_confirm = true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crossterm::event::KeyModifiers;
    use tictactoe_core::{Board, Cell, Mark, Outcome};

    fn press(game: &mut Game, code: KeyCode) -> bool {
        handle_key(game, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn playing() -> Game {
        let mut game = Game::new(DisplayConfig::default());
        press(&mut game, KeyCode::Enter);
        game
    }

    #[test]
    fn menu_enter_starts_and_q_quits() {
        let mut game = Game::new(DisplayConfig::default());
        assert!(!press(&mut game, KeyCode::Enter));
        assert_eq!(game.state, GameState::Playing);

        let mut game = Game::new(DisplayConfig::default());
        assert!(press(&mut game, KeyCode::Char('q')));
    }

    #[test]
    fn enter_plays_cursor_cell() {
        let mut game = playing();
        press(&mut game, KeyCode::Up);
        press(&mut game, KeyCode::Left);
        press(&mut game, KeyCode::Enter);
        assert_eq!(game.board().get(0), Some(Cell::X));
        assert_eq!(game.session.turn(), Mark::O);
    }

    #[test]
    fn digit_keys_play_directly() {
        let mut game = playing();
        press(&mut game, KeyCode::Char('9'));
        press(&mut game, KeyCode::Char('1'));
        assert_eq!(game.board().get(8), Some(Cell::X));
        assert_eq!(game.board().get(0), Some(Cell::O));
        assert_eq!(game.selected_index(), 0);
    }

    #[test]
    fn repeated_digit_is_ignored() {
        let mut game = playing();
        press(&mut game, KeyCode::Char('5'));
        press(&mut game, KeyCode::Char('5'));
        assert_eq!(game.board().count(Cell::Empty), 8);
    }

    #[test]
    fn finished_game_enter_restarts() {
        let mut game = playing();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut game, KeyCode::Char(c));
        }
        assert_eq!(game.outcome().winner(), Some(Mark::X));

        // Digits do nothing once the game is decided.
        press(&mut game, KeyCode::Char('9'));
        assert_eq!(game.board().get(8), Some(Cell::Empty));

        press(&mut game, KeyCode::Enter);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut game = playing();
        assert!(!press(&mut game, KeyCode::Esc));
        assert!(game.show_quit_confirm);
        assert!(!press(&mut game, KeyCode::Char('n')));
        assert!(!game.show_quit_confirm);
        press(&mut game, KeyCode::Esc);
        assert!(press(&mut game, KeyCode::Char('y')));
    }

    #[test]
    fn restart_mid_game() {
        let mut game = playing();
        press(&mut game, KeyCode::Char('5'));
        press(&mut game, KeyCode::Char('r'));
        assert_eq!(game.board(), &Board::new());
    }
}
