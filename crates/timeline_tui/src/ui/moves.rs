//! Move-history list and sort toggle.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::GameView;

use crate::Action;

/// Display index the list keeps on screen: the keyboard cursor when the list
/// is focused, otherwise the viewed step.
fn anchor(view: &GameView, cursor: Option<usize>) -> Option<usize> {
    view.moves().iter().position(|item| match cursor {
        Some(step) => *item.step() == step,
        None => *item.selected(),
    })
}

/// First display index drawn in the bordered list at `area`.
///
/// Scrolls only as far as needed to put the anchor on the last visible row.
pub fn scroll_offset(area: Rect, view: &GameView, cursor: Option<usize>) -> usize {
    let visible = Block::default().borders(Borders::ALL).inner(area).height as usize;
    match anchor(view, cursor) {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    }
}

/// Display index under the terminal coordinate inside the bordered list.
pub fn row_at(area: Rect, count: usize, offset: usize, column: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    let index = offset + (row - inner.y) as usize;
    (index < count).then_some(index)
}

/// Action for a mouse click on the move list, if it hits an item.
///
/// `cursor` must match the one passed to [`render_moves`] so the click sees
/// the same scroll position as the last frame.
pub fn click_at(
    area: Rect,
    view: &GameView,
    cursor: Option<usize>,
    column: u16,
    row: u16,
) -> Option<Action> {
    let offset = scroll_offset(area, view, cursor);
    let index = row_at(area, view.moves().len(), offset, column, row)?;
    view.moves().get(index).map(|item| Action::JumpTo(*item.step()))
}

/// Renders the move list.
///
/// The viewed step is bold green; `cursor` (a history step) is reversed when
/// the list has keyboard focus.
pub fn render_moves(frame: &mut Frame, area: Rect, view: &GameView, cursor: Option<usize>) {
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|item| {
            let mut style = Style::default();
            if *item.selected() {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if cursor == Some(*item.step()) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if *item.selected() { "> " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.label().clone(), style),
            ]))
        })
        .collect();

    let title = if cursor.is_some() { "Moves (focused)" } else { "Moves" };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    let mut state = ListState::default()
        .with_offset(scroll_offset(area, view, cursor))
        .with_selected(anchor(view, cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Renders the sort toggle button.
pub fn render_sort_button(frame: &mut Frame, area: Rect, view: &GameView) {
    let button = Paragraph::new(format!("[ {} ]", view.sort_label()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Sort (s)"));
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::GameSession;

    #[test]
    fn test_row_at_skips_border() {
        let area = Rect::new(10, 5, 30, 8);
        assert_eq!(row_at(area, 3, 0, 12, 5), None);
        assert_eq!(row_at(area, 3, 0, 12, 6), Some(0));
        assert_eq!(row_at(area, 3, 0, 12, 8), Some(2));
        assert_eq!(row_at(area, 3, 0, 12, 9), None);
        assert_eq!(row_at(area, 3, 0, 10, 6), None);
    }

    #[test]
    fn test_row_at_adds_offset() {
        let area = Rect::new(0, 0, 30, 6);
        assert_eq!(row_at(area, 10, 6, 2, 1), Some(6));
        assert_eq!(row_at(area, 10, 6, 2, 4), Some(9));
        assert_eq!(row_at(area, 9, 6, 2, 4), None);
    }

    fn played(cells: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &cell in cells {
            assert!(session.handle_click(cell));
        }
        session
    }

    #[test]
    fn test_scroll_keeps_viewed_step_visible() {
        // Ten entries, four visible rows.
        let mut session = played(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        let area = Rect::new(0, 0, 30, 6);

        let view = GameView::new(&session);
        assert_eq!(scroll_offset(area, &view, None), 6);
        assert_eq!(click_at(area, &view, None, 2, 4), Some(Action::JumpTo(9)));
        assert_eq!(click_at(area, &view, None, 2, 1), Some(Action::JumpTo(6)));

        session.jump_to(2);
        let view = GameView::new(&session);
        assert_eq!(scroll_offset(area, &view, None), 0);
        assert_eq!(click_at(area, &view, None, 2, 1), Some(Action::JumpTo(0)));
    }

    #[test]
    fn test_scroll_follows_focused_cursor() {
        let session = played(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        let view = GameView::new(&session);
        let area = Rect::new(0, 0, 30, 6);

        assert_eq!(scroll_offset(area, &view, Some(0)), 0);
        assert_eq!(scroll_offset(area, &view, Some(5)), 2);
        assert_eq!(click_at(area, &view, Some(5), 2, 4), Some(Action::JumpTo(5)));
    }

    #[test]
    fn test_no_scroll_when_list_fits() {
        let session = played(&[0, 1]);
        let view = GameView::new(&session);
        assert_eq!(scroll_offset(Rect::new(0, 0, 30, 8), &view, None), 0);
        assert_eq!(scroll_offset(Rect::new(0, 0, 30, 2), &view, None), 0);
    }

    #[test]
    fn test_click_follows_display_order() {
        let mut session = GameSession::new();
        session.handle_click(0);
        session.handle_click(1);
        session.toggle_sort();
        let view = GameView::new(&session);
        let area = Rect::new(0, 0, 30, 8);

        assert_eq!(click_at(area, &view, None, 2, 1), Some(Action::JumpTo(2)));
        assert_eq!(click_at(area, &view, None, 2, 3), Some(Action::JumpTo(0)));
        assert_eq!(click_at(area, &view, None, 2, 4), None);
    }
}
