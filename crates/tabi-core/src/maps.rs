use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tabi_types::{EventCategory, ItineraryEvent};

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters left as-is by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Whether the event gets a map link: a non-empty query, or a place-like category.
pub fn has_map_link(event: &ItineraryEvent) -> bool {
    event.map_query.as_deref().is_some_and(|query| !query.is_empty())
        || matches!(
            event.category,
            Some(EventCategory::Sightseeing | EventCategory::Food | EventCategory::Hotel)
        )
}

pub fn map_search_url(query: &str) -> String {
    format!(
        "{}{}",
        MAPS_SEARCH_BASE,
        utf8_percent_encode(query, URI_COMPONENT)
    )
}

/// Map search URL for an event, if it gets a link at all.
pub fn event_map_url(event: &ItineraryEvent) -> Option<String> {
    has_map_link(event).then(|| map_search_url(event.map_query()))
}
