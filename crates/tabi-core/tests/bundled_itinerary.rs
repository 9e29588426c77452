//! Navigation and loading against the bundled Kansai trip.

use std::fs;

use tabi_core::loader::{self, ItinerarySource};
use tabi_core::{Config, Navigator, ViewState};
use tabi_types::{EventCategory, WeatherIcon};
use tempfile::TempDir;

#[test]
fn bundled_trip_has_twelve_days() {
    let itinerary = loader::bundled().expect("bundled data parses");

    assert_eq!(itinerary.len(), 12);
    assert_eq!(itinerary.event_count(), 48);
    assert_eq!(itinerary.trip().title, "關西冬之旅");
    assert_eq!(itinerary.trip().season.as_deref(), Some("2026 Winter"));

    let labels: Vec<&str> = itinerary.days().iter().map(|d| d.label.as_str()).collect();
    let expected: Vec<String> = (1..=12).map(|n| format!("Day {n}")).collect();
    assert_eq!(labels, expected);

    assert_eq!(itinerary.days()[0].date, "01/23");
    assert_eq!(itinerary.days()[11].date, "02/03");
}

#[test]
fn bundled_events_keep_source_order() {
    let itinerary = loader::bundled().unwrap();

    let expected = [
        (4, "TPE 起飛 (D7378)", "Check-in"),
        (3, "伏見稻荷大社", "京都車站周邊"),
        (5, "出發前往近江高島", "返回京都"),
        (5, "前往西舞鶴站", "舟屋晚餐"),
        (5, "伊根早餐", "七外湯巡禮"),
        (5, "城崎晨間時光", "Aeon Mall 岡山"),
        (3, "倉敷美觀地區", "Check-in: Sakura Terrace"),
        (4, "錦市場", "鴨川散步"),
        (3, "嵐山地區", "京都市區自由行"),
        (4, "前往大阪", "飯店溫泉"),
        (3, "大阪城公園", "梅田藍天大廈"),
        (4, "中之島散步", "抵達台北 (TPE)"),
    ];

    for (day, (count, first, last)) in itinerary.days().iter().zip(expected) {
        assert_eq!(day.events.len(), count, "{}", day.label);
        assert_eq!(day.events.first().unwrap().title, first, "{}", day.label);
        assert_eq!(day.events.last().unwrap().title, last, "{}", day.label);
    }
}

#[test]
fn bundled_day_details() {
    let itinerary = loader::bundled().unwrap();

    let day1 = itinerary.day(0).unwrap();
    assert!(!day1.pass);
    assert_eq!(day1.weather_icon, Some(WeatherIcon::Cloudy));
    assert_eq!(day1.temp.as_deref(), Some("4°C / 9°C"));
    let hotel = day1.accommodation.as_ref().unwrap();
    assert_eq!(hotel.name, "Kyoto Sakura Terrace");
    assert_eq!(hotel.check_in.as_deref(), Some("22:00"));

    let day3 = itinerary.day(2).unwrap();
    assert!(day3.pass);
    assert_eq!(day3.events[0].transport.as_deref(), Some("JR Pass Day 1"));
    assert!(day3.events[1].highlight);

    let day12 = itinerary.day(11).unwrap();
    assert_eq!(day12.events[0].time, "Morning");
    assert_eq!(day12.events[1].transport.as_deref(), Some("Airport"));
    assert_eq!(day12.events[1].category, Some(EventCategory::Transport));
}

#[test]
fn walk_the_whole_trip() {
    let itinerary = loader::bundled().unwrap();
    let mut nav = Navigator::for_itinerary(&itinerary);
    assert_eq!(nav.state(), ViewState::Home);

    assert!(nav.select_day(0));
    nav.prev();
    assert_eq!(nav.state(), ViewState::Viewing(0));

    for expected in 1..12 {
        nav.next();
        assert_eq!(nav.state(), ViewState::Viewing(expected));
    }

    nav.next();
    assert_eq!(nav.state(), ViewState::Viewing(11));
    assert!(!nav.has_next());

    let open = nav.state().selected().and_then(|i| itinerary.day(i)).unwrap();
    assert_eq!(open.title, "返台");

    nav.go_home();
    assert_eq!(nav.state(), ViewState::Home);
    assert!(!nav.select_day(12));
    assert_eq!(nav.state(), ViewState::Home);
}

#[test]
fn json_itinerary_through_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("osaka.json");
    fs::write(
        &path,
        r#"{
          "trip": { "title": "Osaka Weekend" },
          "days": [
            {
              "day": "Day 1", "date": "05/02", "weekday": "Sat",
              "title": "Namba", "desc": "Street food",
              "weatherIcon": "rain",
              "events": [
                { "time": "12:00", "title": "Kuromon Market", "desc": "Lunch", "category": "food" },
                { "time": "18:00", "title": "Dotonbori", "desc": "Night walk", "category": "sightseeing", "highlight": true }
              ]
            },
            {
              "day": "Day 2", "date": "05/03", "weekday": "Sun",
              "title": "Home", "desc": "Fly back"
            }
          ]
        }"#,
    )
    .unwrap();

    let config = Config {
        itinerary: Some(path.clone()),
        ..Config::default()
    };
    let source = ItinerarySource::resolve(None, &config);
    assert_eq!(source, ItinerarySource::File(path));

    let itinerary = source.load().unwrap();
    assert_eq!(itinerary.trip().title, "Osaka Weekend");
    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.days()[0].events[1].title, "Dotonbori");
    assert!(itinerary.days()[0].events[1].highlight);
    assert!(itinerary.days()[1].events.is_empty());

    let mut nav = Navigator::for_itinerary(&itinerary);
    assert!(nav.select_day(1));
    nav.next();
    assert_eq!(nav.state(), ViewState::Viewing(1));
}
