//! Timeline Component
//!
//! Encapsulates the event cursor of the open day.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::DayDetailViewModel;
use crate::presentation::views::tui::TimelineView;

/// Actions that Timeline can emit to parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineAction {
    /// Show the map link of the event at this index
    ShowMapLink(usize),
}

pub struct TimelineComponent {
    state: ListState,
}

impl TimelineComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Drop the cursor; called whenever a different day opens.
    pub fn reset(&mut self) {
        self.state = ListState::default();
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<TimelineAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous(data_len);
                None
            }
            KeyCode::Char('m') | KeyCode::Enter => {
                if data_len == 0 {
                    return None;
                }
                Some(TimelineAction::ShowMapLink(
                    self.state.selected().unwrap_or(0).min(data_len - 1),
                ))
            }
            _ => None,
        }
    }

    /// Render timeline with data
    ///
    /// Performs index safety check before rendering.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &DayDetailViewModel) {
        if let Some(selected) = self.state.selected() {
            if data.events.is_empty() {
                self.state.select(None);
            } else if selected >= data.events.len() {
                self.state.select(Some(data.events.len() - 1));
            }
        }

        let list = TimelineView::new(data).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
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

    fn previous(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }

        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for TimelineComponent {
    fn default() -> Self {
        Self::new()
    }
}
