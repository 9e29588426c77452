pub mod cmd {
    pub const BROWSE: &str = "tabi browse";
    pub const DAYS: &str = "tabi days";
    pub const CHECK: &str = "tabi check";
    pub const CONFIG: &str = "tabi config";
    pub const CONFIG_INIT: &str = "tabi config --init";
    pub const HELP: &str = "tabi --help";
}

pub mod fmt {
    pub fn day(number: usize) -> String {
        format!("tabi day {}", number)
    }

    pub fn map(day: usize) -> String {
        format!("tabi map {}", day)
    }

    pub fn browse_day(number: usize) -> String {
        format!("tabi browse --day {}", number)
    }

    pub fn itinerary_flag(path: &str) -> String {
        format!("tabi --itinerary {} check", path)
    }
}
