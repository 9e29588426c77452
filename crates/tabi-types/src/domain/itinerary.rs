use serde::{Deserialize, Serialize};

use super::day::ItineraryDay;
use crate::{Error, Result};

/// Presentation header for the whole trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInfo {
    /// Main title, e.g. "關西冬之旅"
    #[serde(default = "default_title")]
    pub title: String,
    /// Small line above the title, e.g. "2026 Winter"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// Hero background image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
}

fn default_title() -> String {
    "Itinerary".to_string()
}

impl Default for TripInfo {
    fn default() -> Self {
        Self {
            title: default_title(),
            season: None,
            hero: None,
        }
    }
}

/// Wire shape of an itinerary before the non-empty check
#[derive(Deserialize)]
struct RawItinerary {
    #[serde(default)]
    trip: TripInfo,
    days: Vec<ItineraryDay>,
}

impl TryFrom<RawItinerary> for Itinerary {
    type Error = Error;

    fn try_from(raw: RawItinerary) -> Result<Self> {
        Itinerary::new(raw.trip, raw.days)
    }
}

/// The complete, read-only trip: a non-empty ordered sequence of days.
///
/// Day order defines next/previous adjacency for navigation. There is no
/// mutable access once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItinerary")]
pub struct Itinerary {
    trip: TripInfo,
    days: Vec<ItineraryDay>,
}

impl Itinerary {
    pub fn new(trip: TripInfo, days: Vec<ItineraryDay>) -> Result<Self> {
        if days.is_empty() {
            return Err(Error::EmptyItinerary);
        }
        Ok(Self { trip, days })
    }

    pub fn trip(&self) -> &TripInfo {
        &self.trip
    }

    pub fn days(&self) -> &[ItineraryDay] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&ItineraryDay> {
        self.days.get(index)
    }

    /// Number of days. Never zero.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false; kept so `len` has its conventional companion.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).sum()
    }
}
