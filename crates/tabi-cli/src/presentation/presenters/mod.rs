mod screen;
mod system;

pub use screen::{present_day, present_days, present_home, present_screen, present_splash};
pub use system::{present_check, present_config, present_guidance, present_map_links};
