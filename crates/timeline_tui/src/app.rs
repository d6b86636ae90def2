//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use timeline_tictactoe::{GameSession, GameView, Position};
use tracing::{debug, info, instrument};

use crate::input::{self, Action, Focus};
use crate::ui::ScreenLayout;
use crate::TuiConfig;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state: the game session plus UI-only cursor state.
#[derive(Debug, Clone, Getters)]
pub struct App {
    /// The game; only mutated through its handlers.
    session: GameSession,
    /// Board cell under the keyboard cursor.
    cursor: Position,
    /// History step under the move-list cursor.
    list_cursor: usize,
    /// Panel receiving cursor keys.
    focus: Focus,
    /// Whether empty cells show their key.
    show_hints: bool,
    /// Area of the last drawn frame, used for mouse hit testing.
    viewport: Rect,
}

impl App {
    /// Creates a new application from the configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::with_sort(*config.start_ascending()),
            cursor: Position::Center,
            list_cursor: 0,
            focus: Focus::Board,
            show_hints: *config.show_cell_hints(),
            viewport: Rect::default(),
        }
    }

    /// Render model of the current state.
    pub fn view(&self) -> GameView {
        GameView::new(&self.session)
    }

    /// The move-list cursor while the list has keyboard focus.
    pub fn focused_list_cursor(&self) -> Option<usize> {
        (self.focus == Focus::Moves).then_some(self.list_cursor)
    }

    /// Records the area of the frame just drawn.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Applies one action to the session.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Flow {
        match action {
            Action::ClickCell(index) => {
                if self.session.handle_click(index) {
                    self.list_cursor = self.session.step();
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                }
            }
            Action::JumpTo(step) => {
                if self.session.jump_to(step) {
                    self.list_cursor = step;
                }
            }
            Action::ToggleSort => self.session.toggle_sort(),
            Action::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Handles a key event.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return Flow::Continue;
        }
        if input::is_quit(&key) {
            return self.dispatch(Action::Quit);
        }
        if let Some(index) = input::digit_cell(key.code) {
            return self.dispatch(Action::ClickCell(index));
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
                Flow::Continue
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.dispatch(Action::ToggleSort),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.dispatch(Action::ClickCell(self.cursor.index())),
                Focus::Moves => self.dispatch(Action::JumpTo(self.list_cursor)),
            },
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = input::move_cursor(self.cursor, code),
                    Focus::Moves => self.move_list_cursor(code),
                }
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    /// Handles a mouse event; only left-button presses act.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Flow {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Flow::Continue;
        }
        let view = self.view();
        let layout = ScreenLayout::new(self.viewport);
        match layout.action_at(&view, self.focused_list_cursor(), mouse.column, mouse.row) {
            Some(action) => {
                if let Action::ClickCell(index) = action
                    && let Some(pos) = Position::from_index(index)
                {
                    self.focus = Focus::Board;
                    self.cursor = pos;
                }
                if let Action::JumpTo(_) = action {
                    self.focus = Focus::Moves;
                }
                self.dispatch(action)
            }
            None => Flow::Continue,
        }
    }

    /// Moves the list cursor one item in display order.
    fn move_list_cursor(&mut self, key: KeyCode) {
        let view = self.view();
        let steps: Vec<usize> = view.moves().iter().map(|m| *m.step()).collect();
        let current = steps
            .iter()
            .position(|step| *step == self.list_cursor)
            .unwrap_or(0);
        let next = match key {
            KeyCode::Up => current.saturating_sub(1),
            KeyCode::Down => (current + 1).min(steps.len().saturating_sub(1)),
            _ => current,
        };
        if let Some(step) = steps.get(next) {
            self.list_cursor = *step;
        }
    }
}
