use tabi_core::labels::{
    category_icon, category_label, transport_icon, transport_label, weather_glyph,
};
use tabi_types::EventCategory;

use crate::presentation::view_models::WeatherViewModel;

/// "📷 景點"; uncategorised events get no badge.
pub fn category_badge(category: Option<EventCategory>) -> Option<String> {
    category.map(|c| format!("{} {}", category_icon(Some(c)), category_label(c)))
}

/// "🚆 Airport Transfer", "✈ ..." for flights
pub fn transport_badge(transport: &str, category: Option<EventCategory>) -> String {
    format!(
        "{} {}",
        transport_icon(category),
        transport_label(transport)
    )
}

pub fn weather_badge(weather: &WeatherViewModel) -> String {
    format!("{} {}", weather_glyph(weather.icon), weather.temp)
}
