//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use crate::tictactoe::{Cell, Move, SIDE, Symbol};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two vertical grid lines.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two horizontal grid lines.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const POPUP_WIDTH: u16 = 34;
const POPUP_HEIGHT: u16 = 8;
const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;

/// Where each part of the screen goes for a given terminal size.
///
/// Rendering and click mapping both derive from this, so a click always
/// lands on what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Title line.
    pub title: Rect,
    /// The 3x3 grid.
    pub board: Rect,
    /// Status bar.
    pub status: Rect,
    /// End-of-game overlay.
    pub popup: Rect,
    /// "Play Again" button inside the overlay.
    pub restart_button: Rect,
}

impl Screen {
    /// Lays out the screen within `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT), // Board
                Constraint::Length(3), // Status
            ])
            .split(area);

        let popup = center_rect(area, POPUP_WIDTH, POPUP_HEIGHT);
        let restart_button = Rect::new(
            popup.x + popup.width.saturating_sub(BUTTON_WIDTH) / 2,
            popup.y + 4,
            BUTTON_WIDTH.min(popup.width),
            BUTTON_HEIGHT,
        )
        .intersection(popup);

        Self {
            title: chunks[0],
            board: center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT),
            status: chunks[2],
            popup,
            restart_button,
        }
    }
}

/// Renders the whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = app.screen();

    let title = Paragraph::new("Unbeatable Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, screen.title);

    let cursor = app.human_to_move().then(|| app.cursor());
    let board = Paragraph::new(board_lines(app, cursor));
    frame.render_widget(board, screen.board);

    draw_status(frame, app, screen.status);

    if app.state().is_terminal() {
        draw_game_over(frame, app, &screen);
    }
}

fn board_lines(app: &App, cursor: Option<Move>) -> Vec<Line<'static>> {
    let grid = Style::default().fg(Color::DarkGray);
    let blank = " ".repeat(usize::from(CELL_WIDTH));
    let separator = vec!["─".repeat(usize::from(CELL_WIDTH)); SIDE].join("┼");

    let mut lines = Vec::new();
    for row in 0..SIDE {
        if row > 0 {
            lines.push(Line::from(Span::styled(separator.clone(), grid)));
        }
        for sub in 0..CELL_HEIGHT {
            let mut spans = Vec::new();
            for col in 0..SIDE {
                if col > 0 {
                    spans.push(Span::styled("│", grid));
                }
                let mv = Move::new(row, col);
                let cell = app.state().board().get(mv).unwrap_or_default();
                let (mark, mut style) = mark_style(cell);
                if cursor == Some(mv) {
                    style = style.bg(Color::White);
                }
                let text = if sub == CELL_HEIGHT / 2 {
                    format!("{:^width$}", mark, width = usize::from(CELL_WIDTH))
                } else {
                    blank.clone()
                };
                spans.push(Span::styled(text, style));
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn mark_style(cell: Cell) -> (char, Style) {
    match cell {
        Cell::Empty => (' ', Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Symbol::X) => (
            'X',
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Symbol::O) => (
            'O',
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    }
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let color = if app.human_to_move() {
        Color::Blue
    } else {
        Color::Red
    };
    let line = Line::from(vec![
        Span::styled(app.status_text(), Style::default().fg(color)),
        Span::styled(
            "   click or arrows+enter to play, r restart, q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_game_over(frame: &mut Frame, app: &App, screen: &Screen) {
    let (text, color) = app.result_text();

    frame.render_widget(Clear, screen.popup);
    let popup = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Game Over"));
    frame.render_widget(popup, screen.popup);

    let button = Paragraph::new("Play Again")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, screen.restart_button);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
