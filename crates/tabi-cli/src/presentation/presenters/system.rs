use std::path::Path;

use tabi_core::Config;
use tabi_core::maps::{has_map_link, map_search_url};
use tabi_types::{EventCategory, Itinerary, ItineraryDay};

use crate::args::hints::{cmd, fmt as hint};
use crate::presentation::view_models::{
    CategoryCountViewModel, CheckDayViewModel, CheckViewModel, CommandResultViewModel,
    ConfigViewModel, Guidance, GuidanceViewModel, MapLinkViewModel, MapLinksViewModel,
    StatusBadge,
};

/// Map links for a day, optionally narrowed to one zero-based event.
pub fn present_map_links(
    day: &ItineraryDay,
    event: Option<usize>,
) -> CommandResultViewModel<MapLinksViewModel> {
    let links: Vec<MapLinkViewModel> = day
        .events
        .iter()
        .enumerate()
        .filter(|(i, _)| event.is_none_or(|wanted| wanted == *i))
        .filter(|(_, e)| has_map_link(e))
        .map(|(i, e)| MapLinkViewModel {
            event_number: i + 1,
            time: e.time.clone(),
            title: e.title.clone(),
            query: e.map_query().to_string(),
            url: map_search_url(e.map_query()),
        })
        .collect();

    let badge = if links.is_empty() {
        StatusBadge::warning(match event {
            Some(i) => format!("Event {} of {} has no map link", i + 1, day.label),
            None => format!("{} has no map links", day.label),
        })
    } else {
        StatusBadge::info(format!("{} map link(s) for {}", links.len(), day.label))
    };

    CommandResultViewModel::new(MapLinksViewModel {
        day_label: day.label.clone(),
        day_title: day.title.clone(),
        links,
    })
    .with_badge(badge)
}

pub fn present_check(source: &str, itinerary: &Itinerary) -> CommandResultViewModel<CheckViewModel> {
    let events: Vec<_> = itinerary.days().iter().flat_map(|d| &d.events).collect();

    let categories = EventCategory::ALL
        .iter()
        .filter_map(|category| {
            let count = events
                .iter()
                .filter(|e| e.category == Some(*category))
                .count();
            (count > 0).then_some(CategoryCountViewModel {
                category: *category,
                count,
            })
        })
        .collect();

    let trip = itinerary.trip();
    let content = CheckViewModel {
        source: source.to_string(),
        title: trip.title.clone(),
        season: trip.season.clone(),
        day_count: itinerary.len(),
        event_count: itinerary.event_count(),
        pass_days: itinerary.days().iter().filter(|d| d.pass).count(),
        highlights: events.iter().filter(|e| e.highlight).count(),
        categories,
        uncategorized: events.iter().filter(|e| e.category.is_none()).count(),
        days: itinerary
            .days()
            .iter()
            .map(|d| CheckDayViewModel {
                label: d.label.clone(),
                date: d.date.clone(),
                title: d.title.clone(),
                event_count: d.events.len(),
            })
            .collect(),
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!(
            "Itinerary OK: {} days, {} events",
            itinerary.len(),
            itinerary.event_count()
        )))
        .with_suggestion(Guidance::new("List the days").with_command(cmd::DAYS))
}

pub fn present_config(
    data_dir: &Path,
    config_path: &Path,
    config: &Config,
    source: &str,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_exists = config_path.exists();
    let content = ConfigViewModel {
        data_dir: data_dir.to_path_buf(),
        config_path: config_path.to_path_buf(),
        config_exists,
        itinerary_source: source.to_string(),
        splash_enabled: config.splash.enabled,
        splash_duration_ms: config.splash.duration_ms,
        color: config.display.color,
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Write a default config.toml, then set itinerary = \"/path/to/trip.toml\"")
                .with_command(cmd::CONFIG_INIT),
        );
    }
    result
}

pub fn present_guidance(data_dir: &Path) -> CommandResultViewModel<GuidanceViewModel> {
    let config_exists = data_dir.join(Config::FILE_NAME).exists();

    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        data_dir: data_dir.to_path_buf(),
        config_exists,
    })
    .with_suggestion(Guidance::new("Browse the trip").with_command(cmd::BROWSE))
    .with_suggestion(Guidance::new("List every day").with_command(cmd::DAYS))
    .with_suggestion(Guidance::new("Show one day").with_command(hint::day(1)));

    if !config_exists {
        result = result.with_suggestion(
            Guidance::new("Use your own itinerary file")
                .with_command(hint::itinerary_flag("trip.toml")),
        );
    }

    result
        .with_suggestion(Guidance::new("Validate the itinerary").with_command(cmd::CHECK))
        .with_suggestion(Guidance::new("Show the resolved configuration").with_command(cmd::CONFIG))
        .with_suggestion(Guidance::new("For more commands").with_command(cmd::HELP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabi_types::{ItineraryEvent, TripInfo};

    fn kyoto_day() -> ItineraryDay {
        ItineraryDay {
            label: "Day 2".to_string(),
            date: "01/24".to_string(),
            weekday: "Sat".to_string(),
            title: "京都散策".to_string(),
            description: String::new(),
            pass: false,
            background: None,
            weather_icon: None,
            temp: None,
            tips: None,
            accommodation: None,
            events: vec![
                ItineraryEvent::new("08:00", "伏見稻荷大社", "")
                    .with_category(EventCategory::Sightseeing)
                    .with_map_query("Fushimi Inari Taisha")
                    .highlighted(),
                ItineraryEvent::new("11:00", "Bus", "")
                    .with_category(EventCategory::Transport),
                ItineraryEvent::new("18:00", "Ramen", "").with_category(EventCategory::Food),
            ],
        }
    }

    #[test]
    fn test_map_links_skip_ineligible_events() {
        let result = present_map_links(&kyoto_day(), None);
        let numbers: Vec<usize> = result.content.links.iter().map(|l| l.event_number).collect();
        assert_eq!(numbers, [1, 3]);
        assert_eq!(
            result.content.links[0].url,
            "https://www.google.com/maps/search/?api=1&query=Fushimi%20Inari%20Taisha"
        );
        assert_eq!(result.content.links[1].query, "Ramen");
    }

    #[test]
    fn test_single_event_without_link_warns() {
        let result = present_map_links(&kyoto_day(), Some(1));
        assert!(result.content.links.is_empty());
        let badge = result.badge.unwrap();
        assert_eq!(badge.label, "Event 2 of Day 2 has no map link");
    }

    #[test]
    fn test_check_counts() {
        let itinerary = Itinerary::new(TripInfo::default(), vec![kyoto_day()]).unwrap();
        let result = present_check("bundled", &itinerary);

        assert_eq!(result.content.day_count, 1);
        assert_eq!(result.content.event_count, 3);
        assert_eq!(result.content.highlights, 1);
        assert_eq!(result.content.uncategorized, 0);
        let categories: Vec<(EventCategory, usize)> = result
            .content
            .categories
            .iter()
            .map(|c| (c.category, c.count))
            .collect();
        assert_eq!(
            categories,
            [
                (EventCategory::Sightseeing, 1),
                (EventCategory::Food, 1),
                (EventCategory::Transport, 1)
            ]
        );
    }
}
