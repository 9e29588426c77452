use serde::{Deserialize, Serialize};
use std::fmt;

use super::event::ItineraryEvent;

/// Weather icon category attached to a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sunny,
    Cloudy,
    Rain,
    Snow,
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where to stay at the end of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
}

/// One day of the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// Ordinal label, e.g. "Day 1"
    #[serde(rename = "day")]
    pub label: String,
    /// Calendar date as authored, e.g. "01/23"
    pub date: String,
    /// Weekday label, e.g. "Fri"
    pub weekday: String,

    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,

    /// Multi-day transit (JR) pass active on this day
    #[serde(default)]
    pub pass: bool,

    /// Background image reference
    #[serde(default, rename = "bg", skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_icon: Option<WeatherIcon>,
    /// Temperature range, e.g. "2°C / 8°C"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Accommodation>,

    /// Events in authored (chronological) order
    #[serde(default)]
    pub events: Vec<ItineraryEvent>,
}

impl ItineraryDay {
    /// Day-of-month part of `date` ("01/23" -> "23").
    ///
    /// Dates without a `/` are returned unchanged.
    pub fn day_of_month(&self) -> &str {
        self.date
            .split_once('/')
            .map(|(_, day)| day)
            .unwrap_or(&self.date)
    }
}
