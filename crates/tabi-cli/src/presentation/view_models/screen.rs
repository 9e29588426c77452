use serde::Serialize;
use tabi_types::{EventCategory, WeatherIcon};

/// What is on screen for one `ViewState`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "lowercase")]
pub enum ScreenViewModel {
    Home(HomeScreenViewModel),
    Day(DayScreenViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct TripHeaderViewModel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeScreenViewModel {
    pub trip: TripHeaderViewModel,
    pub days: Vec<DayCardViewModel>,
}

/// One entry in the home list or the sidebar
#[derive(Debug, Clone, Serialize)]
pub struct DayCardViewModel {
    /// Zero-based position in the itinerary
    pub index: usize,
    pub label: String,
    pub date: String,
    pub day_of_month: String,
    pub weekday: String,
    pub title: String,
    pub description: String,
    pub pass: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayScreenViewModel {
    pub trip: TripHeaderViewModel,
    pub sidebar: Vec<DayCardViewModel>,
    pub detail: DayDetailViewModel,
    pub nav: NavBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayDetailViewModel {
    pub index: usize,
    pub label: String,
    pub date: String,
    pub weekday: String,
    pub title: String,
    pub description: String,
    pub pass: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Present only when the day carries a temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherViewModel>,
    pub events: Vec<TimelineEventViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherViewModel {
    pub icon: WeatherIcon,
    pub temp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEventViewModel {
    pub time: String,
    pub title: String,
    pub description: String,
    pub highlight: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccommodationViewModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavBarViewModel {
    pub label: String,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplashViewModel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}
