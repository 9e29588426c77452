pub mod day;
pub mod event;
pub mod itinerary;

pub use day::*;
pub use event::*;
pub use itinerary::*;
