use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};
use tictactoe_core::{Cell, Outcome};

use crate::game::{Game, GameState};

// ── Constants ────────────────────────────────────────────────────────────────

/// Each cell is 7 characters wide and 3 rows tall.
const CELL_WIDTH: usize = 7;
const CELL_HEIGHT: usize = 3;

/// 3 cells + 2 separators, plus the surrounding border.
const GRID_WIDTH: u16 = (3 * CELL_WIDTH + 2 + 2) as u16;
const GRID_HEIGHT: u16 = (3 * CELL_HEIGHT + 2 + 2) as u16;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.state {
        GameState::Menu => draw_menu(f),
        GameState::Playing => draw_playing(f, game),
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .split(center_rect(44, 12, area));

    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let title = Paragraph::new(vec![
        Line::from(Span::styled("╔═══════════════════════════╗", title_style)),
        Line::from(Span::styled("║   T I C · T A C · T O E   ║", title_style)),
        Line::from(Span::styled("╚═══════════════════════════╝", title_style)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Controls",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Start game", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("  Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[3]);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let grid_area = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH),
        Constraint::Min(0),
    ])
    .split(outer[1])[1];

    draw_grid(f, game, grid_area);
    draw_status(f, game, outer[3]);
    if game.is_finished() {
        draw_finished(f, game, outer[5]);
    }
    draw_key_hints(f, outer[7]);
}

// ── Grid rendering ───────────────────────────────────────────────────────────

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let mut lines = Vec::with_capacity(3 * CELL_HEIGHT + 2);

    for row in 0..3 {
        if row > 0 {
            lines.push(separator_line());
        }
        for sub in 0..CELL_HEIGHT {
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                let index = row * 3 + col;
                let text = if sub == CELL_HEIGHT / 2 {
                    game.cell_label(index)
                } else {
                    String::new()
                };
                spans.push(Span::styled(
                    format!("{:^width$}", text, width = CELL_WIDTH),
                    cell_style(game, index),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn cell_style(game: &Game, index: usize) -> Style {
    let mut style = match game.board().cells()[index] {
        Cell::X => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Cell::O => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Cell::Empty => Style::default().fg(Color::DarkGray),
    };

    if game.in_winning_line(index) {
        style = style.fg(Color::Green).add_modifier(Modifier::REVERSED);
    }
    if index == game.selected_index() && !game.is_finished() {
        style = style.bg(Color::DarkGray);
    }
    style
}

fn separator_line() -> Line<'static> {
    let bar = "─".repeat(CELL_WIDTH);
    Line::from(Span::styled(
        format!("{bar}┼{bar}┼{bar}"),
        Style::default().fg(Color::DarkGray),
    ))
}

// ── Status line ──────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, game: &Game, area: Rect) {
    let color = match game.outcome() {
        Outcome::InProgress => Color::White,
        Outcome::Won { .. } => Color::Green,
        Outcome::Draw => Color::Yellow,
    };
    let status = Paragraph::new(Span::styled(
        game.status_text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(status, area);
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let desc = Style::default().fg(Color::DarkGray);
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("←↑↓→", key),
        Span::styled(" Move  ", desc),
        Span::styled("Enter", key),
        Span::styled(" Place  ", desc),
        Span::styled("1-9", key),
        Span::styled(" Place at  ", desc),
        Span::styled("r", key),
        Span::styled(" Restart  ", desc),
        Span::styled("Esc", key),
        Span::styled(" Quit", desc),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hints, area);
}

// ── Game over panel ──────────────────────────────────────────────────────────

/// Sits below the grid so the winning line stays visible.
fn draw_finished(f: &mut Frame, game: &Game, area: Rect) {
    let panel = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(32),
        Constraint::Min(0),
    ])
    .split(area)[1];

    let (title, color) = match game.outcome() {
        Outcome::Won { .. } => (" Victory! ", Color::Green),
        _ => (" Game over ", Color::Yellow),
    };

    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            game.status_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: new game   Esc: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, panel);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Any key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}
