use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of event categories.
///
/// Any other string is rejected when an itinerary is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Sightseeing,
    Food,
    Transport,
    Shopping,
    Activity,
    Flight,
    Hotel,
}

impl EventCategory {
    pub const ALL: [EventCategory; 7] = [
        EventCategory::Sightseeing,
        EventCategory::Food,
        EventCategory::Transport,
        EventCategory::Shopping,
        EventCategory::Activity,
        EventCategory::Flight,
        EventCategory::Hotel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Sightseeing => "sightseeing",
            EventCategory::Food => "food",
            EventCategory::Transport => "transport",
            EventCategory::Shopping => "shopping",
            EventCategory::Activity => "activity",
            EventCategory::Flight => "flight",
            EventCategory::Hotel => "hotel",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped activity within a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEvent {
    /// Free-text time label ("15:40", "Morning", ...)
    pub time: String,

    pub title: String,

    #[serde(rename = "desc")]
    pub description: String,

    /// Transport mode label shown as a badge (e.g. "Haruka", "JR Pass Day 2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,

    /// Marks an event as especially notable
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_query: Option<String>,
}

impl ItineraryEvent {
    pub fn new(
        time: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            description: description.into(),
            transport: None,
            highlight: false,
            category: None,
            map_query: None,
        }
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_map_query(mut self, query: impl Into<String>) -> Self {
        self.map_query = Some(query.into());
        self
    }

    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = Some(transport.into());
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Query used for map searches: the explicit query, else the title.
    /// An empty query counts as missing.
    pub fn map_query(&self) -> &str {
        self.map_query
            .as_deref()
            .filter(|query| !query.is_empty())
            .unwrap_or(&self.title)
    }
}
