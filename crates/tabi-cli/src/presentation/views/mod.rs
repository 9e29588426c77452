mod itinerary;
mod system;
pub mod tui;
