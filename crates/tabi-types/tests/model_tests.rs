use tabi_types::*;

const TWO_DAYS_JSON: &str = r#"{
  "trip": { "title": "關西冬之旅", "season": "2026 Winter" },
  "days": [
    {
      "day": "Day 1", "date": "01/23", "weekday": "Fri",
      "title": "抵達京都", "desc": "桃園機場 ➔ 關西機場 ➔ 京都",
      "pass": false,
      "bg": "https://example.com/day1.jpg",
      "weatherIcon": "cloudy",
      "temp": "4°C / 9°C",
      "accommodation": { "name": "Kyoto Sakura Terrace", "checkIn": "22:00" },
      "events": [
        { "time": "15:40", "title": "TPE 起飛", "desc": "AirAsia X", "category": "flight", "mapQuery": "Taoyuan International Airport" },
        { "time": "20:30", "title": "Haruka 特急列車", "desc": "前往京都站", "transport": "Haruka", "category": "transport" },
        { "time": "22:00", "title": "Check-in", "desc": "Kyoto Sakura Terrace", "category": "hotel" }
      ]
    },
    {
      "day": "Day 2", "date": "01/24", "weekday": "Sat",
      "title": "京都散策", "desc": "伏見稻荷",
      "pass": true,
      "events": [
        { "time": "Morning", "title": "伏見稻荷大社", "desc": "千本鳥居", "highlight": true, "category": "sightseeing" }
      ]
    }
  ]
}"#;

#[test]
fn test_deserialize_camel_case_shape() {
    let itinerary: Itinerary = serde_json::from_str(TWO_DAYS_JSON).unwrap();

    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.trip().title, "關西冬之旅");
    assert_eq!(itinerary.trip().season.as_deref(), Some("2026 Winter"));

    let day1 = itinerary.day(0).unwrap();
    assert_eq!(day1.label, "Day 1");
    assert_eq!(day1.weather_icon, Some(WeatherIcon::Cloudy));
    assert_eq!(day1.background.as_deref(), Some("https://example.com/day1.jpg"));
    assert_eq!(
        day1.accommodation.as_ref().and_then(|a| a.check_in.as_deref()),
        Some("22:00")
    );

    let day2 = itinerary.day(1).unwrap();
    assert!(day2.pass);
    assert!(day2.background.is_none());
    assert!(day2.events[0].highlight);
    assert_eq!(day2.events[0].time, "Morning");
}

#[test]
fn test_event_order_is_preserved() {
    let itinerary: Itinerary = serde_json::from_str(TWO_DAYS_JSON).unwrap();
    let times: Vec<&str> = itinerary.days()[0]
        .events
        .iter()
        .map(|e| e.time.as_str())
        .collect();
    assert_eq!(times, vec!["15:40", "20:30", "22:00"]);
}

#[test]
fn test_unknown_category_is_rejected() {
    let json = r#"{
      "days": [{
        "day": "Day 1", "date": "01/23", "weekday": "Fri", "title": "t", "desc": "d",
        "events": [{ "time": "09:00", "title": "x", "desc": "y", "category": "nightlife" }]
      }]
    }"#;
    let err = serde_json::from_str::<Itinerary>(json).unwrap_err();
    assert!(err.to_string().contains("nightlife"));
}

#[test]
fn test_empty_days_are_rejected() {
    let err = serde_json::from_str::<Itinerary>(r#"{ "days": [] }"#).unwrap_err();
    assert!(err.to_string().contains("itinerary has no days"));

    assert_eq!(
        Itinerary::new(TripInfo::default(), Vec::new()).unwrap_err(),
        Error::EmptyItinerary
    );
}

#[test]
fn test_trip_header_defaults() {
    let toml_src = r#"
[[days]]
day = "Day 1"
date = "01/23"
weekday = "Fri"
title = "Arrival"
desc = "Land and check in"
"#;
    let itinerary: Itinerary = toml::from_str(toml_src).unwrap();
    assert_eq!(itinerary.trip().title, "Itinerary");
    assert!(itinerary.trip().season.is_none());
    assert!(itinerary.days()[0].events.is_empty());
    assert!(!itinerary.days()[0].pass);
}

#[test]
fn test_serialize_omits_absent_optionals() {
    let event = ItineraryEvent::new("12:00", "Lunch", "Ramen").with_category(EventCategory::Food);
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["desc"], "Ramen");
    assert_eq!(value["category"], "food");
    assert!(value.get("highlight").is_none());
    assert!(value.get("mapQuery").is_none());
}
