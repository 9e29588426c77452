//! Day List Component
//!
//! Cursor over the home list. Opening a day is a domain action, so it goes
//! up to the renderer instead of touching the navigator here.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::DayCardViewModel;
use crate::presentation::views::tui::DayListView;

/// Actions the day list emits to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayListAction {
    /// Open the day at this zero-based index
    Open(usize),
}

pub struct DayListComponent {
    state: ListState,
}

impl DayListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Put the cursor on `index` (e.g. the day just left when going home).
    pub fn select(&mut self, index: usize) {
        self.state.select(Some(index));
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<DayListAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                if data_len > 0 {
                    self.state.select(Some(data_len - 1));
                }
                None
            }
            KeyCode::Enter => self.state.selected().map(DayListAction::Open),
            // Digits jump straight to that day; the navigator rejects out-of-range ones
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|d| DayListAction::Open(d as usize - 1)),
            _ => None,
        }
    }

    /// Render the list, clamping the cursor to the data first.
    pub fn render(&mut self, f: &mut Frame, area: Rect, days: &[DayCardViewModel]) {
        self.clamp(days.len());
        let list = DayListView::new(days).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn clamp(&mut self, data_len: usize) {
        if data_len == 0 {
            self.state.select(None);
        } else if let Some(selected) = self.state.selected()
            && selected >= data_len
        {
            self.state.select(Some(data_len - 1));
        }
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let next = match self.state.selected() {
            Some(i) if i + 1 < data_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for DayListComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut list = DayListComponent::new();
        assert_eq!(list.selected(), Some(0));

        list.handle_input(key(KeyCode::Up), 3);
        assert_eq!(list.selected(), Some(0));

        for _ in 0..5 {
            list.handle_input(key(KeyCode::Char('j')), 3);
        }
        assert_eq!(list.selected(), Some(2));

        list.handle_input(key(KeyCode::Char('k')), 3);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_enter_opens_cursor_day() {
        let mut list = DayListComponent::new();
        list.handle_input(key(KeyCode::Down), 12);
        assert_eq!(
            list.handle_input(key(KeyCode::Enter), 12),
            Some(DayListAction::Open(1))
        );
    }

    #[test]
    fn test_digits_open_days() {
        let mut list = DayListComponent::new();
        assert_eq!(
            list.handle_input(key(KeyCode::Char('1')), 12),
            Some(DayListAction::Open(0))
        );
        assert_eq!(
            list.handle_input(key(KeyCode::Char('9')), 12),
            Some(DayListAction::Open(8))
        );
        assert_eq!(list.handle_input(key(KeyCode::Char('0')), 12), None);
    }

    #[test]
    fn test_clamp_after_data_shrinks() {
        let mut list = DayListComponent::new();
        list.select(10);
        list.clamp(3);
        assert_eq!(list.selected(), Some(2));
        list.clamp(0);
        assert_eq!(list.selected(), None);
    }
}
