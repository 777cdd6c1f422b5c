//! Application state and the human/AI turn loop.

use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::{layout::Rect, style::Color};
use tracing::{debug, info, warn};

use super::input::{cell_at, contains, digit_move, move_cursor};
use super::ui::Screen;
use crate::config::GameConfig;
use crate::tictactoe::{GameState, Move, MoveError, Outcome, best_move};

/// Main application state.
///
/// Owns the single authoritative [`GameState`]. Every transition replaces it
/// with the value returned by the engine.
pub struct App {
    state: GameState,
    config: GameConfig,
    cursor: Move,
    /// When the AI may play its pending move.
    ai_due: Option<Instant>,
    screen: Screen,
    should_quit: bool,
}

impl App {
    /// Creates a new application. If the AI plays X it is scheduled at once.
    pub fn new(config: GameConfig, now: Instant) -> Self {
        let mut app = Self {
            state: GameState::new(),
            config,
            cursor: Move::new(1, 1),
            ai_due: None,
            screen: Screen::new(Rect::default()),
            should_quit: false,
        };
        app.schedule_ai(now);
        app
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Gets the layout of the last frame.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recomputes the layout for a terminal of size `area`.
    pub fn resize(&mut self, area: Rect) {
        if area != Rect::default() {
            self.screen = Screen::new(area);
        }
    }

    /// True while the game is running and waiting on the human.
    pub fn human_to_move(&self) -> bool {
        !self.state.is_terminal() && self.state.turn() == *self.config.human_symbol()
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        match self.state.outcome() {
            Some(_) => self.result_text().0.to_string(),
            None if self.human_to_move() => {
                format!("Your turn ({})", self.config.human_symbol())
            }
            None => "AI thinking...".to_string(),
        }
    }

    /// Result message and colour for the end-of-game overlay.
    pub fn result_text(&self) -> (&'static str, Color) {
        match self.state.outcome() {
            Some(Outcome::Draw) => ("It's a Tie!", Color::White),
            Some(Outcome::Winner(symbol)) if symbol == *self.config.human_symbol() => {
                ("You Win! (Impossible!)", Color::Green)
            }
            Some(Outcome::Winner(_)) => ("AI Wins!", Color::Red),
            None => ("", Color::Reset),
        }
    }

    /// Handles a left click at a terminal position.
    pub fn click(&mut self, column: u16, row: u16, now: Instant) {
        if self.state.is_terminal() {
            if contains(self.screen.restart_button, column, row) {
                self.restart(now);
            }
            return;
        }

        if let Some(mv) = cell_at(self.screen.board, column, row) {
            self.cursor = mv;
            self.play_human(mv, now);
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(now),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_human(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(mv) = digit_move(c) {
                    self.cursor = mv;
                    self.play_human(mv, now);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Plays the AI's move once its thinking delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;

        // The engine must never be asked about a finished game.
        if self.state.is_terminal() || self.human_to_move() {
            return;
        }

        let ai = self.config.ai_symbol();
        let Some(mv) = best_move(self.state.board(), ai, *self.config.human_symbol()) else {
            warn!("AI found no move on a live board");
            return;
        };
        match self.state.apply_move(mv, ai) {
            Ok(next) => {
                info!(%mv, cell = mv.label(), "AI played");
                self.state = next;
            }
            Err(e) => warn!(error = %e, %mv, "AI move rejected"),
        }
    }

    /// Starts a fresh game.
    pub fn restart(&mut self, now: Instant) {
        debug!("Restarting game");
        self.state = self.state.reset();
        self.cursor = Move::new(1, 1);
        self.ai_due = None;
        self.schedule_ai(now);
    }

    fn play_human(&mut self, mv: Move, now: Instant) {
        if !self.human_to_move() {
            debug!(%mv, "Ignoring input while it's not the human's turn");
            return;
        }

        match self.state.apply_move(mv, *self.config.human_symbol()) {
            Ok(next) => {
                info!(%mv, cell = mv.label(), "Human played");
                self.state = next;
                self.schedule_ai(now);
            }
            Err(MoveError::CellOccupied(_)) => debug!(%mv, "Cell occupied, click ignored"),
            Err(e) => warn!(error = %e, %mv, "Human move rejected"),
        }
    }

    fn schedule_ai(&mut self, now: Instant) {
        if !self.state.is_terminal() && !self.human_to_move() {
            self.ai_due = Some(now + self.config.think_delay());
        }
    }
}
