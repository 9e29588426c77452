use tabi_core::maps::event_map_url;
use tabi_core::{Navigator, ViewState};
use tabi_types::{Itinerary, ItineraryDay, ItineraryEvent};

use crate::args::hints::fmt as hint;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    AccommodationViewModel, CommandResultViewModel, DayCardViewModel, DayDetailViewModel,
    DayScreenViewModel, Guidance, HomeScreenViewModel, NavBarViewModel, ScreenViewModel,
    SplashViewModel, TimelineEventViewModel, TripHeaderViewModel, WeatherViewModel,
};
use tabi_core::labels::effective_weather;

/// Build the screen for the navigator's current state.
///
/// A `Viewing` index the itinerary does not have renders the home list.
pub fn present_screen(nav: &Navigator, itinerary: &Itinerary) -> ScreenViewModel {
    match nav.state() {
        ViewState::Home => ScreenViewModel::Home(present_home(itinerary)),
        ViewState::Viewing(index) => match present_day_screen(nav, itinerary, index) {
            Some(day) => ScreenViewModel::Day(day),
            None => {
                tracing::warn!(index, days = itinerary.len(), "selected day missing, showing home");
                ScreenViewModel::Home(present_home(itinerary))
            }
        },
    }
}

pub fn present_home(itinerary: &Itinerary) -> HomeScreenViewModel {
    HomeScreenViewModel {
        trip: present_trip(itinerary),
        days: present_cards(itinerary, None),
    }
}

pub fn present_splash(itinerary: &Itinerary) -> SplashViewModel {
    let trip = itinerary.trip();
    SplashViewModel {
        title: trip.title.clone(),
        season: trip.season.clone(),
    }
}

/// `tabi days`
pub fn present_days(itinerary: &Itinerary) -> CommandResultViewModel<HomeScreenViewModel> {
    CommandResultViewModel::new(present_home(itinerary))
        .with_suggestion(Guidance::new("Open a day's timeline").with_command(hint::day(1)))
        .with_suggestion(Guidance::new("Browse interactively").with_command(cmd::BROWSE))
}

/// `tabi day N`; `None` when the navigator is not viewing a day.
pub fn present_day(
    nav: &Navigator,
    itinerary: &Itinerary,
) -> Option<CommandResultViewModel<DayScreenViewModel>> {
    let index = nav.state().selected()?;
    let screen = present_day_screen(nav, itinerary, index)?;
    let number = index + 1;

    let mut result = CommandResultViewModel::new(screen);
    if itinerary
        .day(index)
        .is_some_and(|day| day.events.iter().any(tabi_core::maps::has_map_link))
    {
        result = result.with_suggestion(
            Guidance::new("Map links for this day").with_command(hint::map(number)),
        );
    }
    if nav.has_next() {
        result = result
            .with_suggestion(Guidance::new("Next day").with_command(hint::day(number + 1)));
    }
    Some(result.with_suggestion(
        Guidance::new("Open this day interactively").with_command(hint::browse_day(number)),
    ))
}

fn present_day_screen(
    nav: &Navigator,
    itinerary: &Itinerary,
    index: usize,
) -> Option<DayScreenViewModel> {
    let day = itinerary.day(index)?;

    Some(DayScreenViewModel {
        trip: present_trip(itinerary),
        sidebar: present_cards(itinerary, Some(index)),
        detail: present_detail(day, index),
        nav: NavBarViewModel {
            label: day.label.clone(),
            has_prev: nav.has_prev(),
            has_next: nav.has_next(),
        },
    })
}

fn present_trip(itinerary: &Itinerary) -> TripHeaderViewModel {
    let trip = itinerary.trip();
    TripHeaderViewModel {
        title: trip.title.clone(),
        season: trip.season.clone(),
        hero: trip.hero.clone(),
    }
}

fn present_cards(itinerary: &Itinerary, selected: Option<usize>) -> Vec<DayCardViewModel> {
    itinerary
        .days()
        .iter()
        .enumerate()
        .map(|(index, day)| DayCardViewModel {
            index,
            label: day.label.clone(),
            date: day.date.clone(),
            day_of_month: day.day_of_month().to_string(),
            weekday: day.weekday.clone(),
            title: day.title.clone(),
            description: day.description.clone(),
            pass: day.pass,
            selected: selected == Some(index),
        })
        .collect()
}

fn present_detail(day: &ItineraryDay, index: usize) -> DayDetailViewModel {
    DayDetailViewModel {
        index,
        label: day.label.clone(),
        date: day.date.clone(),
        weekday: day.weekday.clone(),
        title: day.title.clone(),
        description: day.description.clone(),
        pass: day.pass,
        background: day.background.clone(),
        weather: day.temp.as_ref().map(|temp| WeatherViewModel {
            icon: effective_weather(day.weather_icon),
            temp: temp.clone(),
        }),
        events: day.events.iter().map(present_event).collect(),
        accommodation: day
            .accommodation
            .as_ref()
            .map(|stay| AccommodationViewModel {
                name: stay.name.clone(),
                check_in: stay.check_in.clone(),
            }),
        tips: day.tips.clone(),
    }
}

fn present_event(event: &ItineraryEvent) -> TimelineEventViewModel {
    TimelineEventViewModel {
        time: event.time.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        highlight: event.highlight,
        category: event.category,
        transport: event.transport.clone(),
        map_url: event_map_url(event),
    }
}
