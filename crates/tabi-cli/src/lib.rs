// NOTE: tabi Architecture Rationale
//
// Why a single controller (not per-screen state)?
// - Home list and day detail are two renderings of one `ViewState`
// - next/prev/home/select all live in `tabi_core::Navigator`, the TUI only routes keys
// - Console commands (`days`, `day N`) reuse the same presenters the TUI draws from
//
// Why read-only data?
// - An itinerary is authored once (TOML/JSON or the bundled trip) and never edited here
// - Every screen is a pure function of (ViewState, Itinerary)
// - Trade-off: no in-app editing, but renders are trivially testable

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
