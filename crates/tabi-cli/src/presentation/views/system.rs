use std::fmt;

use owo_colors::AnsiColors;
use tabi_core::labels::category_label;

use super::itinerary::{paint, strong};
use crate::presentation::formatters::{max_width, pad_to_width};
use crate::presentation::view_models::{
    CheckViewModel, ConfigViewModel, CreateView, DisplayOptions, GuidanceViewModel,
    MapLinksViewModel, ViewMode,
};

impl CreateView for MapLinksViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(MapLinksView {
            data: self,
            options,
        })
    }
}

struct MapLinksView<'a> {
    data: &'a MapLinksViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for MapLinksView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.mode == ViewMode::Minimal {
            for link in &self.data.links {
                writeln!(f, "{}", link.url)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "{} {}",
            strong(&self.data.day_label, self.options.enable_color),
            self.data.day_title
        )?;
        for link in &self.data.links {
            writeln!(f, "  {}. {} {}", link.event_number, link.time, link.title)?;
            writeln!(
                f,
                "     {}",
                paint(&link.url, AnsiColors::Cyan, self.options.enable_color)
            )?;
        }
        Ok(())
    }
}

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CheckView {
            data: self,
            options,
        })
    }
}

struct CheckView<'a> {
    data: &'a CheckViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for CheckView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "Source:   {}", data.source)?;
        match &data.season {
            Some(season) => writeln!(f, "Trip:     {} ({})", data.title, season)?,
            None => writeln!(f, "Trip:     {}", data.title)?,
        }
        writeln!(f, "Days:     {}", data.day_count)?;
        writeln!(f, "Events:   {}", data.event_count)?;
        writeln!(f, "JR Pass:  {} day(s)", data.pass_days)?;
        writeln!(f, "Featured: {}", data.highlights)?;

        let mut parts: Vec<String> = data
            .categories
            .iter()
            .map(|c| format!("{} {}", category_label(c.category), c.count))
            .collect();
        if data.uncategorized > 0 {
            parts.push(format!("other {}", data.uncategorized));
        }
        writeln!(f, "Kinds:    {}", parts.join(", "))?;

        if matches!(self.options.mode, ViewMode::Standard | ViewMode::Verbose) {
            writeln!(f)?;
            let width = max_width(data.days.iter().map(|d| d.label.as_str()));
            for day in &data.days {
                writeln!(
                    f,
                    "  {}  {}  {} ({} events)",
                    pad_to_width(&day.label, width),
                    day.date,
                    day.title,
                    day.event_count
                )?;
            }
        }
        Ok(())
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        writeln!(f, "Data directory: {}", data.data_dir.display())?;
        writeln!(
            f,
            "Config file:    {}{}",
            data.config_path.display(),
            if data.config_exists { "" } else { " (not found, using defaults)" }
        )?;
        writeln!(f, "Itinerary:      {}", data.itinerary_source)?;
        if data.splash_enabled {
            writeln!(f, "Splash:         {} ms", data.splash_duration_ms)?;
        } else {
            writeln!(f, "Splash:         off")?;
        }
        writeln!(f, "Color:          {}", if data.color { "on" } else { "off" })
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tabi - day-by-day itinerary viewer")?;
        if !self.data.config_exists {
            writeln!(f)?;
            writeln!(
                f,
                "No config.toml in {}; the bundled Kansai trip is used unless --itinerary is given.",
                self.data.data_dir.display()
            )?;
        }
        Ok(())
    }
}
