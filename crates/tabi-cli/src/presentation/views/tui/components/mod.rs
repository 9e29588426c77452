pub mod day_list;
pub mod timeline;

pub use day_list::{DayListAction, DayListComponent};
pub use timeline::{TimelineAction, TimelineComponent};
