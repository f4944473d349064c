use crate::models::event::Event;

const MAPS_SEARCH_URL: &str = "https://maps.google.com/maps?q=";

/// Google Maps search link for the event's address, if it has one.
pub fn map_link(event: &Event) -> Option<String> {
    let address = event.address()?;
    Some(format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(address)))
}
