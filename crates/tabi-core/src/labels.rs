//! Display lookup tables for categories, weather and transport.
//!
//! Each table is an exhaustive `match`, so adding a category or weather kind
//! fails to compile until every table knows about it.

use tabi_types::{EventCategory, WeatherIcon};

pub const UNCATEGORIZED_ICON: &str = "📍";

/// Short label shown on the category badge.
pub fn category_label(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Food => "美食",
        EventCategory::Sightseeing => "景點",
        EventCategory::Shopping => "購物",
        EventCategory::Hotel => "住宿",
        EventCategory::Transport => "交通",
        EventCategory::Flight => "航班",
        EventCategory::Activity => "體驗",
    }
}

pub fn category_icon(category: Option<EventCategory>) -> &'static str {
    match category {
        Some(EventCategory::Food) => "🍜",
        Some(EventCategory::Sightseeing) => "📷",
        Some(EventCategory::Shopping) => "🛍",
        Some(EventCategory::Hotel) => "🛏",
        Some(EventCategory::Transport) => "🚆",
        Some(EventCategory::Flight) => "✈",
        Some(EventCategory::Activity) => "🎫",
        None => UNCATEGORIZED_ICON,
    }
}

/// Weather kind actually displayed; days without one show as cloudy.
pub fn effective_weather(icon: Option<WeatherIcon>) -> WeatherIcon {
    icon.unwrap_or(WeatherIcon::Cloudy)
}

pub fn weather_glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Sunny => "☀",
        WeatherIcon::Cloudy => "☁",
        WeatherIcon::Rain => "☂",
        WeatherIcon::Snow => "❄",
    }
}

/// Transport badge text. The bare "Airport" marker reads better spelled out.
pub fn transport_label(transport: &str) -> &str {
    if transport == "Airport" {
        "Airport Transfer"
    } else {
        transport
    }
}

/// Flights ride a plane badge, everything else a train.
pub fn transport_icon(category: Option<EventCategory>) -> &'static str {
    match category {
        Some(EventCategory::Flight) => "✈",
        _ => "🚆",
    }
}
