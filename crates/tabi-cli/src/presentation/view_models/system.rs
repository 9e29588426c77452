use serde::Serialize;
use std::path::PathBuf;
use tabi_types::EventCategory;

#[derive(Debug, Clone, Serialize)]
pub struct MapLinksViewModel {
    pub day_label: String,
    pub day_title: String,
    pub links: Vec<MapLinkViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapLinkViewModel {
    /// One-based position of the event within its day
    pub event_number: usize,
    pub time: String,
    pub title: String,
    pub query: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckViewModel {
    pub source: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub day_count: usize,
    pub event_count: usize,
    pub pass_days: usize,
    pub highlights: usize,
    pub categories: Vec<CategoryCountViewModel>,
    pub uncategorized: usize,
    pub days: Vec<CheckDayViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCountViewModel {
    pub category: EventCategory,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckDayViewModel {
    pub label: String,
    pub date: String,
    pub title: String,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_exists: bool,
    pub itinerary_source: String,
    pub splash_enabled: bool,
    pub splash_duration_ms: u64,
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: PathBuf,
    pub config_exists: bool,
}
