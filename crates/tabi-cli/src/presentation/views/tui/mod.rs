//! Ratatui widgets for `tabi browse`
//!
//! Views here build widgets from view models and hold no state. Cursors
//! live in `components`, which own their `ListState` and turn key presses
//! into actions for the renderer.

pub mod components;
mod day_list;
mod detail;
mod header;
mod nav_bar;
mod splash;
mod status_bar;
mod timeline;

pub use components::{DayListAction, DayListComponent, TimelineAction, TimelineComponent};
pub use day_list::{DayListView, SidebarView};
pub use detail::{DayHeaderView, InfoCardsView};
pub use header::TripHeaderView;
pub use nav_bar::NavBarView;
pub use splash::SplashView;
pub use status_bar::StatusBarView;
pub use timeline::TimelineView;
