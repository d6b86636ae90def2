//! Rendering tests against ratatui's in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use timeline_tui::ui::{self, ScreenLayout, board::BoardLayout};
use timeline_tui::{Action, App, Flow, TuiConfig};

fn render(app: &mut App) -> String {
    render_sized(app, 80, 24)
}

fn render_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let frame = terminal.draw(|f| ui::draw(f, app)).unwrap();
    let area = frame.area;
    app.set_viewport(area);

    let buffer = terminal.backend().buffer();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(app: &mut App, cells: &[usize]) {
    for &cell in cells {
        assert_eq!(app.dispatch(Action::ClickCell(cell)), Flow::Continue);
    }
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(&TuiConfig::default());
    let screen = render(&mut app);

    assert!(screen.contains("Timeline - Tic Tac Toe"));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("[ Descending ]"));
}

#[test]
fn test_win_screen() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, &[0, 4, 1, 3, 2]);
    let screen = render(&mut app);

    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Go to move #5 (1,3)"));
    assert!(screen.contains("Go to move #2 (2,2)"));
}

#[test]
fn test_draw_screen() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    let screen = render(&mut app);

    assert!(screen.contains("Draw"));
    assert!(!screen.contains("Next player"));
}

#[test]
fn test_descending_list_puts_latest_first() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, &[4, 0]);
    app.dispatch(Action::ToggleSort);
    let screen = render(&mut app);

    let latest = screen.find("Go to move #2").unwrap();
    let start = screen.find("Go to game start").unwrap();
    assert!(latest < start);
    assert!(screen.contains("[ Ascending ]"));
}

#[test]
fn test_time_travel_screen() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, &[4, 0, 8]);
    app.dispatch(Action::JumpTo(1));
    let screen = render(&mut app);

    assert!(screen.contains("Next player: O"));
    // Future moves stay listed until a new move branches off.
    assert!(screen.contains("Go to move #3 (3,3)"));
}

#[test]
fn test_mouse_round_trip_through_rendered_layout() {
    let mut app = App::new(&TuiConfig::default());
    render(&mut app);

    let layout = ScreenLayout::new(*app.viewport());
    let cell = BoardLayout::new(layout.board_inner).cell(0).unwrap();
    let click = |column, row| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    app.handle_mouse(click(cell.x + 3, cell.y + 1));
    assert_eq!(app.session().history().len(), 2);

    let screen = render(&mut app);
    assert!(screen.contains("Next player: O"));

    // Clicking the first list row jumps back to the start.
    app.handle_mouse(click(layout.moves.x + 3, layout.moves.y + 1));
    assert_eq!(app.session().step(), 0);

    app.handle_mouse(click(layout.sort.x + 2, layout.sort.y + 1));
    assert!(!app.session().is_ascending());
}

#[test]
fn test_short_terminal_scrolls_move_list() {
    let mut app = App::new(&TuiConfig::default());
    play(&mut app, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    // Six list rows for ten entries: the viewed last move stays on screen.
    let screen = render_sized(&mut app, 80, 20);
    assert!(screen.contains("Go to move #9 (3,3)"));
    assert!(screen.contains("Go to move #4 (2,1)"));
    assert!(!screen.contains("Go to game start"));

    let layout = ScreenLayout::new(*app.viewport());
    let click = |column, row| MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    // The top visible row is move #4, not the hidden start entry.
    app.handle_mouse(click(layout.moves.x + 3, layout.moves.y + 1));
    assert_eq!(app.session().step(), 4);

    let screen = render_sized(&mut app, 80, 20);
    assert!(screen.contains("Go to game start"));
    assert!(!screen.contains("Go to move #9"));

    // Moving the focused cursor down scrolls the list with it.
    for _ in 0..5 {
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    }
    assert_eq!(*app.list_cursor(), 9);
    let screen = render_sized(&mut app, 80, 20);
    assert!(screen.contains("Go to move #9 (3,3)"));
    assert!(!screen.contains("Go to game start"));

    app.handle_mouse(click(layout.moves.x + 3, layout.moves.bottom() - 2));
    assert_eq!(app.session().step(), 9);
}

#[test]
fn test_hints_can_be_disabled() {
    let toml = "show_cell_hints = false\n";
    let config: TuiConfig = toml::from_str(toml).unwrap();
    let mut app = App::new(&config);
    let screen = render(&mut app);

    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    let board = BoardLayout::new(layout.board_inner);
    let cell = board.cell(8).unwrap();
    let row: String = screen
        .lines()
        .nth((cell.y + 1) as usize)
        .unwrap()
        .chars()
        .skip(cell.x as usize)
        .take(cell.width as usize)
        .collect();
    assert!(!row.contains('9'));
}

#[test]
fn test_quit_key() {
    let mut app = App::new(&TuiConfig::default());
    assert_eq!(
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        Flow::Quit
    );
}
