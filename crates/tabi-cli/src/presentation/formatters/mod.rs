pub mod event;
pub mod style;
pub mod text;

pub use event::{category_badge, transport_badge, weather_badge};
pub use text::{max_width, pad_to_width, truncate_width};
