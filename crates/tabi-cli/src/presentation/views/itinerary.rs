use std::fmt;

use owo_colors::{AnsiColors, OwoColorize};

use crate::presentation::formatters::style::{category_ansi, weather_ansi};
use crate::presentation::formatters::{
    category_badge, max_width, pad_to_width, transport_badge, weather_badge,
};
use crate::presentation::view_models::{
    CreateView, DayDetailViewModel, DayScreenViewModel, DisplayOptions, HomeScreenViewModel,
    NavBarViewModel, ScreenViewModel, TimelineEventViewModel, TripHeaderViewModel, ViewMode,
};

pub(crate) fn paint(text: &str, color: AnsiColors, enable: bool) -> String {
    if enable {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn strong(text: &str, enable: bool) -> String {
    if enable {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn write_trip_header(
    f: &mut fmt::Formatter<'_>,
    trip: &TripHeaderViewModel,
    options: DisplayOptions,
) -> fmt::Result {
    if let Some(season) = &trip.season {
        writeln!(f, "{}", paint(season, AnsiColors::BrightBlack, options.enable_color))?;
    }
    writeln!(f, "{}", strong(&trip.title, options.enable_color))?;
    if options.mode == ViewMode::Verbose
        && let Some(hero) = &trip.hero
    {
        writeln!(f, "hero: {}", hero)?;
    }
    writeln!(f)
}

impl CreateView for HomeScreenViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(HomeListView {
            data: self,
            options,
        })
    }
}

/// The list of days (`tabi days`)
struct HomeListView<'a> {
    data: &'a HomeScreenViewModel,
    options: DisplayOptions,
}

impl<'a> fmt::Display for HomeListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;

        if self.options.mode == ViewMode::Minimal {
            for day in &self.data.days {
                writeln!(f, "{}", day.label)?;
            }
            return Ok(());
        }

        write_trip_header(f, &self.data.trip, self.options)?;

        let label_width = max_width(self.data.days.iter().map(|d| d.label.as_str()));
        for day in &self.data.days {
            let pass = if day.pass {
                format!("  {}", paint("JR PASS", AnsiColors::Red, color))
            } else {
                String::new()
            };

            writeln!(
                f,
                "{}  {} {}  {}{}",
                pad_to_width(&day.label, label_width),
                day.date,
                day.weekday,
                strong(&day.title, color),
                pass
            )?;

            match self.options.mode {
                ViewMode::Standard | ViewMode::Verbose => {
                    writeln!(
                        f,
                        "{}  {}",
                        " ".repeat(label_width),
                        paint(&day.description, AnsiColors::BrightBlack, color)
                    )?;
                }
                ViewMode::Minimal | ViewMode::Compact => {}
            }
        }

        Ok(())
    }
}

impl CreateView for DayScreenViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DayDetailView {
            detail: &self.detail,
            nav: &self.nav,
            options,
        })
    }
}

impl CreateView for ScreenViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        match self {
            ScreenViewModel::Home(home) => home.create_view(options),
            ScreenViewModel::Day(day) => day.create_view(options),
        }
    }
}

/// One day's detail page (`tabi day N`)
struct DayDetailView<'a> {
    detail: &'a DayDetailViewModel,
    nav: &'a NavBarViewModel,
    options: DisplayOptions,
}

impl<'a> DayDetailView<'a> {
    fn write_event(
        &self,
        f: &mut fmt::Formatter<'_>,
        event: &TimelineEventViewModel,
        time_width: usize,
    ) -> fmt::Result {
        let color = self.options.enable_color;
        let marker = if event.highlight { "★" } else { "•" };

        let mut line = format!(
            "  {} {}  ",
            paint(marker, AnsiColors::Red, color && event.highlight),
            pad_to_width(&event.time, time_width)
        );
        if let Some(badge) = category_badge(event.category) {
            line.push_str(&paint(&badge, category_ansi(event.category), color));
            line.push_str("  ");
        }
        if event.highlight {
            line.push_str(&strong(&event.title, color));
        } else {
            line.push_str(&event.title);
        }
        if let Some(transport) = &event.transport {
            line.push_str("  [");
            line.push_str(&transport_badge(transport, event.category));
            line.push(']');
        }
        writeln!(f, "{}", line)?;

        let indent = " ".repeat(time_width + 5);
        match self.options.mode {
            ViewMode::Standard | ViewMode::Verbose => {
                if !event.description.is_empty() {
                    writeln!(
                        f,
                        "{}{}",
                        indent,
                        paint(&event.description, AnsiColors::BrightBlack, color)
                    )?;
                }
            }
            ViewMode::Minimal | ViewMode::Compact => {}
        }
        if self.options.mode == ViewMode::Verbose
            && let Some(url) = &event.map_url
        {
            writeln!(f, "{}map: {}", indent, paint(url, AnsiColors::Cyan, color))?;
        }
        Ok(())
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.options.enable_color;
        let prev = if self.nav.has_prev { "← Prev" } else { "      " };
        let next = if self.nav.has_next { "Next →" } else { "" };
        writeln!(f, "{}   {}   {}", prev, strong(&self.nav.label, color), next)
    }
}

impl<'a> fmt::Display for DayDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = self.detail;
        let color = self.options.enable_color;
        let time_width = max_width(detail.events.iter().map(|e| e.time.as_str()));

        if self.options.mode == ViewMode::Minimal {
            for event in &detail.events {
                writeln!(f, "{}  {}", pad_to_width(&event.time, time_width), event.title)?;
            }
            return Ok(());
        }

        let mut heading = format!(
            "{} · {} {}",
            strong(&detail.label, color),
            detail.date,
            detail.weekday
        );
        if let Some(weather) = &detail.weather {
            heading.push_str(" · ");
            heading.push_str(&paint(
                &weather_badge(weather),
                weather_ansi(weather.icon),
                color,
            ));
        }
        if detail.pass {
            heading.push_str("  ");
            heading.push_str(&paint("JR PASS", AnsiColors::Red, color));
        }
        writeln!(f, "{}", heading)?;
        writeln!(f, "{}", strong(&detail.title, color))?;
        writeln!(f, "{}", detail.description)?;
        if self.options.mode == ViewMode::Verbose
            && let Some(bg) = &detail.background
        {
            writeln!(f, "background: {}", bg)?;
        }
        writeln!(f)?;

        for event in &detail.events {
            self.write_event(f, event, time_width)?;
        }

        match self.options.mode {
            ViewMode::Compact => {
                if let Some(stay) = &detail.accommodation {
                    writeln!(f)?;
                    match &stay.check_in {
                        Some(time) => writeln!(f, "Stay: {} · Check-in after {}", stay.name, time)?,
                        None => writeln!(f, "Stay: {}", stay.name)?,
                    }
                }
            }
            _ => {
                if let Some(stay) = &detail.accommodation {
                    writeln!(f)?;
                    writeln!(f, "{}", paint("Accommodation", AnsiColors::BrightBlue, color))?;
                    writeln!(f, "  {}", strong(&stay.name, color))?;
                    if let Some(time) = &stay.check_in {
                        writeln!(f, "  Check-in after {}", time)?;
                    }
                }
                if let Some(tips) = &detail.tips {
                    writeln!(f)?;
                    writeln!(f, "{}", paint("Travel Tip", AnsiColors::Yellow, color))?;
                    writeln!(f, "  {}", tips)?;
                }
            }
        }

        writeln!(f)?;
        self.write_footer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        AccommodationViewModel, DayCardViewModel, WeatherViewModel,
    };
    use tabi_types::{EventCategory, WeatherIcon};

    fn home() -> HomeScreenViewModel {
        let card = |index: usize, label: &str, title: &str, pass: bool| DayCardViewModel {
            index,
            label: label.to_string(),
            date: format!("01/2{}", index + 3),
            day_of_month: format!("2{}", index + 3),
            weekday: "Fri".to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            pass,
            selected: false,
        };
        HomeScreenViewModel {
            trip: TripHeaderViewModel {
                title: "關西冬之旅".to_string(),
                season: Some("2026 Winter".to_string()),
                hero: None,
            },
            days: vec![
                card(0, "Day 1", "抵達京都", false),
                card(1, "Day 2", "京都散策", true),
            ],
        }
    }

    fn day_screen() -> DayScreenViewModel {
        DayScreenViewModel {
            trip: home().trip,
            sidebar: home().days,
            detail: DayDetailViewModel {
                index: 11,
                label: "Day 12".to_string(),
                date: "02/03".to_string(),
                weekday: "Tue".to_string(),
                title: "返台".to_string(),
                description: "最後時光".to_string(),
                pass: false,
                background: None,
                weather: Some(WeatherViewModel {
                    icon: WeatherIcon::Cloudy,
                    temp: "6°C / 12°C".to_string(),
                }),
                events: vec![TimelineEventViewModel {
                    time: "15:30".to_string(),
                    title: "前往關西機場".to_string(),
                    description: "Rapi:t".to_string(),
                    highlight: false,
                    category: Some(EventCategory::Transport),
                    transport: Some("Airport".to_string()),
                    map_url: None,
                }],
                accommodation: Some(AccommodationViewModel {
                    name: "Sweet Home".to_string(),
                    check_in: Some("22:00".to_string()),
                }),
                tips: Some("Arrive early".to_string()),
            },
            nav: NavBarViewModel {
                label: "Day 12".to_string(),
                has_prev: true,
                has_next: false,
            },
        }
    }

    fn render<T: CreateView>(vm: &T, mode: ViewMode) -> String {
        vm.create_view(DisplayOptions::new(mode, false)).to_string()
    }

    #[test]
    fn test_home_minimal_is_labels_only() {
        assert_eq!(render(&home(), ViewMode::Minimal), "Day 1\nDay 2\n");
    }

    #[test]
    fn test_home_compact() {
        let out = render(&home(), ViewMode::Compact);
        assert!(out.starts_with("2026 Winter\n關西冬之旅\n\n"));
        assert!(out.contains("Day 1  01/23 Fri  抵達京都\n"));
        assert!(out.contains("Day 2  01/24 Fri  京都散策  JR PASS\n"));
        assert!(!out.contains("desc"));
    }

    #[test]
    fn test_home_standard_adds_descriptions() {
        let out = render(&home(), ViewMode::Standard);
        assert!(out.contains("       desc\n"));
    }

    #[test]
    fn test_day_compact() {
        let out = render(&day_screen(), ViewMode::Compact);
        assert!(out.starts_with("Day 12 · 02/03 Tue · ☁ 6°C / 12°C\n返台\n"));
        assert!(out.contains("15:30  🚆 交通  前往關西機場  [🚆 Airport Transfer]"));
        assert!(out.contains("Stay: Sweet Home · Check-in after 22:00"));
        assert!(!out.contains("Arrive early"));
        assert!(out.ends_with("← Prev   Day 12   \n"));
    }

    #[test]
    fn test_day_standard_has_cards() {
        let out = render(&day_screen(), ViewMode::Standard);
        assert!(out.contains("Accommodation\n  Sweet Home\n  Check-in after 22:00\n"));
        assert!(out.contains("Travel Tip\n  Arrive early\n"));
        assert!(out.contains("Rapi:t"));
    }
}
