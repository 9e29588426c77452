//! Itinerary files for integration tests.
//!
//! Kept ASCII-only so assertions can match output byte for byte.

/// Three days: a pass day in the middle, a day with no events at the end.
pub const THREE_DAYS_TOML: &str = r#"
[trip]
title = "Osaka Weekend"
season = "2026 Spring"

[[days]]
day = "Day 1"
date = "04/03"
weekday = "Fri"
title = "Arrive Osaka"
desc = "KIX to Namba"
pass = false
weatherIcon = "sunny"
temp = "12C / 19C"
tips = "Buy an ICOCA card at the airport."
accommodation = { name = "Namba Stay", checkIn = "15:00" }

[[days.events]]
time = "10:00"
title = "Land at KIX"
desc = "Terminal 1"
category = "flight"
transport = "Peach MM022"
mapQuery = "Kansai International Airport"

[[days.events]]
time = "13:00"
title = "Nankai Rapi:t"
desc = "To Namba"
category = "transport"
transport = "Airport"

[[days.events]]
time = "19:00"
title = "Dotonbori"
desc = "Street food dinner"
category = "food"
highlight = true

[[days]]
day = "Day 2"
date = "04/04"
weekday = "Sat"
title = "Nara Day Trip"
desc = "Deer and temples"
pass = true

[[days.events]]
time = "09:00"
title = "Todai-ji"
desc = "Great Buddha Hall"
category = "sightseeing"
highlight = true

[[days.events]]
time = "15:00"
title = "Free time"
desc = "Walk around Nara Park"

[[days]]
day = "Day 3"
date = "04/05"
weekday = "Sun"
title = "Fly Home"
desc = "Check out and head to KIX"
pass = false
"#;

/// Two days in the camelCase JSON shape.
pub const TWO_DAYS_JSON: &str = r#"{
  "trip": { "title": "Kyoto Short Stay" },
  "days": [
    {
      "day": "Day 1", "date": "11/20", "weekday": "Fri",
      "title": "Temples", "desc": "Higashiyama walk",
      "events": [
        { "time": "09:00", "title": "Kiyomizu-dera", "desc": "Morning visit", "category": "sightseeing" }
      ]
    },
    {
      "day": "Day 2", "date": "11/21", "weekday": "Sat",
      "title": "Markets", "desc": "Nishiki and Teramachi",
      "events": [
        { "time": "11:00", "title": "Nishiki Market", "desc": "Lunch", "category": "food", "mapQuery": "Nishiki Market Kyoto" }
      ]
    }
  ]
}"#;

/// Not valid TOML
pub const BROKEN_TOML: &str = "[trip\ntitle = \"Broken\"\n";

/// Well-formed TOML with an empty day list
pub const EMPTY_DAYS_TOML: &str = "days = []\n\n[trip]\ntitle = \"Nowhere\"\n";
