use anyhow::Result;

use super::utils::{export_window, format_datetime};
use crate::models::event::Event;

const GOOGLE_TEMPLATE_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Build a Google Calendar "add event" link with a one-hour slot.
pub fn google_calendar_link(event: &Event) -> Result<String> {
    let (start, end) = export_window(event)?;

    Ok(format!(
        "{}&text={}&dates={}/{}&details={}&location={}",
        GOOGLE_TEMPLATE_URL,
        urlencoding::encode(&event.title),
        format_datetime(&start),
        format_datetime(&end),
        urlencoding::encode(&event.description),
        urlencoding::encode(event.address().unwrap_or("")),
    ))
}
