//! Colour tables for categories and weather, for both console and TUI output.

use owo_colors::AnsiColors;
use ratatui::style::Color;
use tabi_types::{EventCategory, WeatherIcon};

pub fn category_ansi(category: Option<EventCategory>) -> AnsiColors {
    match category {
        Some(EventCategory::Food) => AnsiColors::Yellow,
        Some(EventCategory::Sightseeing) => AnsiColors::Blue,
        Some(EventCategory::Shopping) => AnsiColors::Magenta,
        Some(EventCategory::Hotel) => AnsiColors::BrightBlue,
        Some(EventCategory::Transport) => AnsiColors::BrightBlack,
        Some(EventCategory::Flight) => AnsiColors::Cyan,
        Some(EventCategory::Activity) => AnsiColors::Red,
        None => AnsiColors::BrightBlack,
    }
}

pub fn category_color(category: Option<EventCategory>) -> Color {
    match category {
        Some(EventCategory::Food) => Color::Yellow,
        Some(EventCategory::Sightseeing) => Color::Blue,
        Some(EventCategory::Shopping) => Color::Magenta,
        Some(EventCategory::Hotel) => Color::LightBlue,
        Some(EventCategory::Transport) => Color::DarkGray,
        Some(EventCategory::Flight) => Color::Cyan,
        Some(EventCategory::Activity) => Color::Red,
        None => Color::Gray,
    }
}

pub fn weather_ansi(icon: WeatherIcon) -> AnsiColors {
    match icon {
        WeatherIcon::Sunny => AnsiColors::Yellow,
        WeatherIcon::Cloudy => AnsiColors::BrightBlack,
        WeatherIcon::Rain => AnsiColors::Blue,
        WeatherIcon::Snow => AnsiColors::BrightCyan,
    }
}

pub fn weather_color(icon: WeatherIcon) -> Color {
    match icon {
        WeatherIcon::Sunny => Color::Yellow,
        WeatherIcon::Cloudy => Color::Gray,
        WeatherIcon::Rain => Color::Blue,
        WeatherIcon::Snow => Color::LightCyan,
    }
}
