//! # Presentation Layer
//!
//! MVVM for the console commands, plus components for the interactive browser.
//!
//! ## Console output (text / JSON)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ## `tabi browse`
//!
//! ```text
//! [ BrowseApp ] --key--> [ Component ] --Action--> [ BrowseApp ] --> Navigator
//!       |
//!       +--> present_screen(nav, itinerary) --> [ View ] (ratatui widget)
//! ```
//!
//! ## Rules
//!
//! 1. **Raw data in view models.** JSON output is an API: times, dates and
//!    temperatures are passed through as authored, categories as enums.
//!    Icons and badges are added by views.
//! 2. **`ViewMode` is density, not shape.** Minimal prints labels only,
//!    Compact one line per item, Standard adds descriptions and cards,
//!    Verbose adds map URLs and image references. `--format json` ignores it.
//! 3. **Cursors live in components.** The list and timeline cursors are UI
//!    state, never part of a view model, and are clamped to the data on
//!    every render.
//! 4. **Navigation goes up.** Components emit actions; only the renderer
//!    calls the navigator.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, OutputFormat, StatusBadge,
    StatusLevel, ViewMode,
};
