//! Core of the tabi itinerary viewer.
//!
//! - `navigation`: the view-state controller (home list vs. one open day)
//! - `loader`: reading itineraries from TOML/JSON, plus the bundled data set
//! - `config`: workspace path resolution and `config.toml`
//! - `splash`: the one-shot introductory timer
//! - `maps`: map search links for events
//! - `labels`: category, weather and transport display tables

pub mod config;
pub mod error;
pub mod labels;
pub mod loader;
pub mod maps;
pub mod navigation;
pub mod splash;

pub use config::Config;
pub use error::{Error, Result};
pub use navigation::{Navigator, ViewState};
pub use splash::Splash;
