//! Interactive renderer for `tabi browse`
//!
//! The app owns the navigator and the UI components. Key presses are routed
//! to the component for the current screen; domain actions coming back from
//! the components become navigator calls. Every frame is rebuilt from
//! `present_screen`, so what is drawn always matches the navigator state.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    widgets::{Clear, ListState},
};
use tabi_core::maps::event_map_url;
use tabi_core::{Navigator, Splash, ViewState};
use tabi_types::Itinerary;

use crate::presentation::presenters::{present_screen, present_splash};
use crate::presentation::view_models::{DayScreenViewModel, HomeScreenViewModel, ScreenViewModel};
use crate::presentation::views::tui::{
    DayHeaderView, DayListAction, DayListComponent, InfoCardsView, NavBarView, SidebarView,
    SplashView, StatusBarView, TimelineAction, TimelineComponent, TripHeaderView,
};

const TICK: Duration = Duration::from_millis(250);
const SIDEBAR_WIDTH: u16 = 28;
const INFO_WIDTH: u16 = 34;

pub struct BrowseApp {
    itinerary: Itinerary,
    nav: Navigator,
    splash: Splash,
    day_list: DayListComponent,
    timeline: TimelineComponent,
    status: Option<String>,
    should_quit: bool,
}

impl BrowseApp {
    pub fn new(itinerary: Itinerary, splash: Splash) -> Self {
        let nav = Navigator::for_itinerary(&itinerary);
        Self {
            itinerary,
            nav,
            splash,
            day_list: DayListComponent::new(),
            timeline: TimelineComponent::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.nav.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Open day `index` (zero-based). Out-of-range indices are ignored.
    pub fn open_day(&mut self, index: usize) -> bool {
        if !self.nav.select_day(index) {
            tracing::debug!(index, "ignored selection of missing day");
            return false;
        }
        self.day_list.select(index);
        self.timeline.reset();
        self.status = None;
        tracing::debug!(index, "opened day");
        true
    }

    /// The screen the next frame will draw
    pub fn screen(&self) -> ScreenViewModel {
        present_screen(&self.nav, &self.itinerary)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.nav.state() {
            ViewState::Home => self.handle_home_key(key),
            ViewState::Viewing(index) => self.handle_day_key(key, index),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {
                if let Some(DayListAction::Open(index)) =
                    self.day_list.handle_input(key, self.itinerary.len())
                {
                    self.open_day(index);
                }
            }
        }
    }

    fn handle_day_key(&mut self, key: KeyEvent, index: usize) {
        let before = self.nav.state();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('p') => self.nav.prev(),
            KeyCode::Right | KeyCode::Char('n') => self.nav.next(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('H') => {
                self.nav.go_home();
                self.day_list.select(index);
            }
            _ => {
                let events = self
                    .itinerary
                    .day(index)
                    .map(|day| day.events.as_slice())
                    .unwrap_or_default();
                if let Some(TimelineAction::ShowMapLink(event)) =
                    self.timeline.handle_input(key, events.len())
                {
                    self.status = Some(
                        events
                            .get(event)
                            .and_then(event_map_url)
                            .unwrap_or_else(|| "No map link for this event".to_string()),
                    );
                }
            }
        }

        let after = self.nav.state();
        if after != before {
            self.timeline.reset();
            self.status = None;
            if let Some(day) = after.selected() {
                self.day_list.select(day);
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        match self.screen() {
            ScreenViewModel::Home(home) => self.draw_home(f, area, &home),
            ScreenViewModel::Day(day) => self.draw_day(f, area, &day),
        }

        if self.splash.is_visible() {
            let splash = present_splash(&self.itinerary);
            f.render_widget(Clear, area);
            f.render_widget(SplashView::new(&splash).build(), area);
        }
    }

    fn draw_home(&mut self, f: &mut Frame, area: Rect, home: &HomeScreenViewModel) {
        let [header, list, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(TripHeaderView::new(&home.trip).build(), header);
        self.day_list.render(f, list, &home.days);
        f.render_widget(StatusBarView::new(self.status(), false).build(), status);
    }

    fn draw_day(&mut self, f: &mut Frame, area: Rect, day: &DayScreenViewModel) {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .areas(body);
        let [day_header, content, nav_bar] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(main);

        f.render_widget(TripHeaderView::new(&day.trip).build(), header);

        let sidebar_view = SidebarView::new(&day.sidebar);
        let mut sidebar_state = ListState::default().with_selected(sidebar_view.selected());
        f.render_stateful_widget(sidebar_view.build_list(), sidebar, &mut sidebar_state);

        f.render_widget(DayHeaderView::new(&day.detail).build(), day_header);

        let cards = InfoCardsView::new(&day.detail);
        if cards.is_empty() {
            self.timeline.render(f, content, &day.detail);
        } else {
            let [timeline, info] =
                Layout::horizontal([Constraint::Min(20), Constraint::Length(INFO_WIDTH)])
                    .areas(content);
            self.timeline.render(f, timeline, &day.detail);
            f.render_widget(cards.build(), info);
        }

        f.render_widget(NavBarView::new(&day.nav).build(), nav_bar);
        f.render_widget(StatusBarView::new(self.status(), true).build(), status);
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        {
            let interrupted = interrupted.clone();
            ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
                .context("Failed to install ctrl-c handler")?;
        }

        enable_raw_mode()?;
        let mut terminal = setup_or_restore(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            restore_terminal,
        )?;
        tracing::info!(days = self.itinerary.len(), "browse started");

        let result = self.event_loop(&mut terminal, &interrupted);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        tracing::info!("browse finished");

        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            // Wake up when the splash ends so it disappears on time
            let timeout = match self.splash.remaining_at(Instant::now()) {
                remaining if remaining.is_zero() => TICK,
                remaining => remaining.min(TICK),
            };

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            if interrupted.load(Ordering::SeqCst) {
                self.should_quit = true;
            }
        }
        Ok(())
    }
}

/// Runs the steps after raw mode is on; a failure undoes raw mode before returning.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().map_err(|err| {
        tracing::warn!(error = %err, "terminal setup failed, restoring");
        restore();
        anyhow::Error::new(err).context("Failed to set up the terminal")
    })
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    const TRIP: &str = r#"{
      "trip": { "title": "Kansai Test Trip", "season": "2026 Winter" },
      "days": [
        {
          "day": "Day 1", "date": "01/23", "weekday": "Fri",
          "title": "Arrive Kyoto", "desc": "Airport to Kyoto",
          "pass": false,
          "temp": "4C / 9C",
          "accommodation": { "name": "Sakura Terrace", "checkIn": "22:00" },
          "events": [
            { "time": "20:30", "title": "Haruka Express", "desc": "To Kyoto Station", "transport": "Haruka", "category": "transport" },
            { "time": "22:00", "title": "Hotel check-in", "desc": "Sakura Terrace", "category": "hotel" }
          ]
        },
        {
          "day": "Day 2", "date": "01/24", "weekday": "Sat",
          "title": "Fushimi Walk", "desc": "Shrines",
          "pass": true,
          "events": [
            { "time": "Morning", "title": "Fushimi Inari", "desc": "Torii gates", "highlight": true, "category": "sightseeing" },
            { "time": "18:00", "title": "Free time", "desc": "Rest" }
          ]
        },
        {
          "day": "Day 3", "date": "01/25", "weekday": "Sun",
          "title": "Fly Home", "desc": "KIX",
          "pass": false,
          "events": []
        }
      ]
    }"#;

    fn app() -> BrowseApp {
        let itinerary: Itinerary = serde_json::from_str(TRIP).unwrap();
        BrowseApp::new(itinerary, Splash::disabled())
    }

    fn press(app: &mut BrowseApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render(app: &mut BrowseApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_open_navigate_and_return_home() {
        let mut app = app();
        assert_eq!(app.state(), ViewState::Home);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), ViewState::Viewing(1));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.state(), ViewState::Viewing(2));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state(), ViewState::Viewing(2));

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state(), ViewState::Viewing(0));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), ViewState::Home);
        assert_eq!(app.day_list.selected(), Some(0));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_digit_jump_ignores_missing_days() {
        let mut app = app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.state(), ViewState::Home);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state(), ViewState::Viewing(2));
    }

    #[test]
    fn test_map_key_reports_link_in_status() {
        let mut app = app();
        assert!(app.open_day(1));

        press(&mut app, KeyCode::Char('m'));
        assert!(
            app.status()
                .is_some_and(|s| s.ends_with("query=Fushimi%20Inari"))
        );

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.status(), Some("No map link for this event"));

        press(&mut app, KeyCode::Right);
        assert_eq!(app.status(), None);
        assert_eq!(app.timeline.selected(), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_home_list() {
        let mut app = app();
        let screen = render(&mut app);
        assert!(screen.contains("Kansai Test Trip"));
        assert!(screen.contains("Arrive Kyoto"));
        assert!(screen.contains("Fly Home"));
        assert!(screen.contains("JR PASS"));
        assert!(screen.contains("Enter open"));
    }

    #[test]
    fn test_render_day_detail() {
        let mut app = app();
        app.open_day(0);
        let screen = render(&mut app);
        assert!(screen.contains("Day 1"));
        assert!(screen.contains("Haruka Express"));
        assert!(screen.contains("Airport to Kyoto"));
        assert!(screen.contains("Check-in after 22:00"));
        assert!(screen.contains("Next ->"));
    }

    #[test]
    fn test_splash_overlays_without_blocking_input() {
        let itinerary: Itinerary = serde_json::from_str(TRIP).unwrap();
        let mut app = BrowseApp::new(itinerary, Splash::new(Duration::from_secs(60)));

        let screen = render(&mut app);
        assert!(screen.contains("Loading itinerary..."));
        assert!(!screen.contains("Arrive Kyoto"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state(), ViewState::Viewing(0));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = std::cell::Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(io::Error::other("no tty")),
            || restored.set(true),
        );
        assert!(restored.get());
        assert_eq!(
            format!("{:#}", result.unwrap_err()),
            "Failed to set up the terminal: no tty"
        );

        let restored = std::cell::Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
