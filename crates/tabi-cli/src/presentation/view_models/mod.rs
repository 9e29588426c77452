pub mod common;
pub mod result;
pub mod screen;
pub mod system;

pub use common::{DisplayOptions, Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use result::CommandResultViewModel;
pub use screen::*;
pub use system::*;

use std::fmt;

/// Bridge from a view model (data) to its text view (layout)
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
