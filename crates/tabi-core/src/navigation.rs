//! View-state controller.
//!
//! Tracks whether the home list is showing or a single day is open, and moves
//! between days with clamping at both ends. This is the only mutable state in
//! the viewer; the itinerary itself is never touched.
//!
//! ```text
//! Home --select_day(i)--> Viewing(i)
//! Viewing(i) --go_home--> Home
//! Viewing(i) --next--> Viewing(i+1)   (i+1 < N, else stays)
//! Viewing(i) --prev--> Viewing(i-1)   (i >= 1, else stays)
//! Viewing(i) --select_day(j)--> Viewing(j)
//! ```

use serde::Serialize;
use tabi_types::Itinerary;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "index", rename_all = "lowercase")]
pub enum ViewState {
    /// Full list of days, nothing selected
    #[default]
    Home,
    /// One day open, by zero-based index into the itinerary
    Viewing(usize),
}

impl ViewState {
    pub fn selected(&self) -> Option<usize> {
        match self {
            ViewState::Home => None,
            ViewState::Viewing(index) => Some(*index),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, ViewState::Home)
    }
}

/// Navigation state machine over a fixed number of days
#[derive(Debug, Clone)]
pub struct Navigator {
    state: ViewState,
    day_count: usize,
}

impl Navigator {
    /// Start in `Home` over `day_count` days.
    pub fn new(day_count: usize) -> Self {
        Self {
            state: ViewState::Home,
            day_count,
        }
    }

    pub fn for_itinerary(itinerary: &Itinerary) -> Self {
        Self::new(itinerary.len())
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Open the day at `index`.
    ///
    /// Out-of-range indices leave the state unchanged and return `false`.
    pub fn select_day(&mut self, index: usize) -> bool {
        if index >= self.day_count {
            tracing::debug!(index, day_count = self.day_count, "ignoring out-of-range day");
            return false;
        }
        tracing::debug!(from = ?self.state, to = index, "select day");
        self.state = ViewState::Viewing(index);
        true
    }

    pub fn go_home(&mut self) {
        if !self.state.is_home() {
            tracing::debug!(from = ?self.state, "go home");
        }
        self.state = ViewState::Home;
    }

    /// Move to the following day; no-op at the last day or on the home list.
    pub fn next(&mut self) {
        if let ViewState::Viewing(index) = self.state
            && index + 1 < self.day_count
        {
            self.state = ViewState::Viewing(index + 1);
            tracing::debug!(to = index + 1, "next day");
        }
    }

    /// Move to the preceding day; no-op at the first day or on the home list.
    pub fn prev(&mut self) {
        if let ViewState::Viewing(index) = self.state
            && index > 0
        {
            self.state = ViewState::Viewing(index - 1);
            tracing::debug!(to = index - 1, "previous day");
        }
    }

    pub fn has_next(&self) -> bool {
        match self.state {
            ViewState::Home => false,
            ViewState::Viewing(index) => index + 1 < self.day_count,
        }
    }

    pub fn has_prev(&self) -> bool {
        match self.state {
            ViewState::Home => false,
            ViewState::Viewing(index) => index > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 12;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new(N);
        assert_eq!(nav.state(), ViewState::Home);
        assert!(!nav.has_next());
        assert!(!nav.has_prev());
    }

    #[test]
    fn test_select_every_day() {
        let mut nav = Navigator::new(N);
        for i in 0..N {
            assert!(nav.select_day(i));
            assert_eq!(nav.state(), ViewState::Viewing(i));
        }
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut nav = Navigator::new(N);
        assert!(!nav.select_day(N));
        assert_eq!(nav.state(), ViewState::Home);

        nav.select_day(3);
        assert!(!nav.select_day(usize::MAX));
        assert_eq!(nav.state(), ViewState::Viewing(3));
    }

    #[test]
    fn test_go_home_is_idempotent() {
        let mut nav = Navigator::new(N);
        nav.select_day(5);
        nav.go_home();
        assert_eq!(nav.state(), ViewState::Home);
        nav.go_home();
        assert_eq!(nav.state(), ViewState::Home);
    }

    #[test]
    fn test_prev_clamps_at_first_day() {
        let mut nav = Navigator::new(N);
        nav.select_day(0);
        assert!(!nav.has_prev());
        nav.prev();
        assert_eq!(nav.state(), ViewState::Viewing(0));
    }

    #[test]
    fn test_next_clamps_at_last_day() {
        let mut nav = Navigator::new(N);
        nav.select_day(N - 1);
        assert!(!nav.has_next());
        nav.next();
        assert_eq!(nav.state(), ViewState::Viewing(N - 1));
    }

    #[test]
    fn test_next_then_prev_round_trips() {
        for i in 1..N - 1 {
            let mut nav = Navigator::new(N);
            nav.select_day(i);
            nav.next();
            nav.prev();
            assert_eq!(nav.state(), ViewState::Viewing(i));
        }
    }

    #[test]
    fn test_next_and_prev_do_nothing_at_home() {
        let mut nav = Navigator::new(N);
        nav.next();
        assert_eq!(nav.state(), ViewState::Home);
        nav.prev();
        assert_eq!(nav.state(), ViewState::Home);
    }

    #[test]
    fn test_single_day_has_no_neighbours() {
        let mut nav = Navigator::new(1);
        nav.select_day(0);
        assert!(!nav.has_next());
        assert!(!nav.has_prev());
        nav.next();
        nav.prev();
        assert_eq!(nav.state(), ViewState::Viewing(0));
    }

    #[test]
    fn test_walk_whole_trip() {
        let mut nav = Navigator::new(N);
        nav.select_day(0);
        assert!(!nav.has_prev());
        assert!(nav.has_next());

        for _ in 0..N - 1 {
            nav.next();
        }
        assert_eq!(nav.state(), ViewState::Viewing(N - 1));

        nav.next();
        assert_eq!(nav.state(), ViewState::Viewing(N - 1));
        assert!(!nav.has_next());

        nav.go_home();
        assert_eq!(nav.state(), ViewState::Home);
    }

    #[test]
    fn test_view_state_serializes_with_mode_tag() {
        let json = serde_json::to_string(&ViewState::Viewing(2)).unwrap();
        assert_eq!(json, r#"{"mode":"viewing","index":2}"#);
        let json = serde_json::to_string(&ViewState::Home).unwrap();
        assert_eq!(json, r#"{"mode":"home"}"#);
    }
}
