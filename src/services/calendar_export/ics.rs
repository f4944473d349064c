use anyhow::Result;
use chrono::{DateTime, Utc};

use super::utils::{escape_text, export_window, fold_line, format_datetime};
use crate::models::event::Event;

/// Build a one-event iCalendar payload stamped with the current time.
pub fn to_ics(event: &Event) -> Result<String> {
    to_ics_at(event, Utc::now())
}

/// Build a one-event iCalendar payload with `DTSTAMP` set to `stamp`.
pub fn to_ics_at(event: &Event, stamp: DateTime<Utc>) -> Result<String> {
    let (start, end) = export_window(event)?;

    let mut ics = calendar_header();
    push_line(&mut ics, "BEGIN:VEVENT");
    push_line(&mut ics, &format!("UID:{}", build_uid(event)));
    push_line(&mut ics, &format!("DTSTAMP:{}", format_datetime(&stamp)));
    push_line(&mut ics, &format!("DTSTART:{}", format_datetime(&start)));
    push_line(&mut ics, &format!("DTEND:{}", format_datetime(&end)));
    push_line(&mut ics, &format!("SUMMARY:{}", escape_text(&event.title)));
    push_line(
        &mut ics,
        &format!("DESCRIPTION:{}", escape_text(&event.description)),
    );
    push_line(
        &mut ics,
        &format!("LOCATION:{}", escape_text(event.address().unwrap_or(""))),
    );
    push_line(&mut ics, "END:VEVENT");
    push_line(&mut ics, "END:VCALENDAR");
    Ok(ics)
}

/// Suggested file name for the downloaded payload, e.g. `Meetup.ics`
pub fn ics_file_name(event: &Event) -> String {
    let stem: String = event
        .title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "event.ics".to_string()
    } else {
        format!("{}.ics", stem)
    }
}

fn calendar_header() -> String {
    let mut ics = String::new();
    push_line(&mut ics, "BEGIN:VCALENDAR");
    push_line(&mut ics, "VERSION:2.0");
    push_line(&mut ics, "PRODID:-//Event Board//EN");
    push_line(&mut ics, "CALSCALE:GREGORIAN");
    ics
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(&fold_line(line));
    buffer.push_str("\r\n");
}

fn build_uid(event: &Event) -> String {
    format!("{}@events.com", event.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meetup() -> Event {
        Event::builder()
            .id("evt-42")
            .title("Meetup")
            .description("Monthly Rust meetup")
            .address("221B Baker St")
            .occurs_at(Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap())
            .build()
            .unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_export_event() {
        let ics = to_ics_at(&meetup(), stamp()).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("VERSION:2.0\r\n"));
        assert!(ics.contains("UID:evt-42@events.com\r\n"));
        assert!(ics.contains("DTSTAMP:20240301T083000Z\r\n"));
        assert!(ics.contains("DTSTART:20240315T180000Z\r\n"));
        assert!(ics.contains("DTEND:20240315T190000Z\r\n"));
        assert!(ics.contains("SUMMARY:Meetup\r\n"));
        assert!(ics.contains("DESCRIPTION:Monthly Rust meetup\r\n"));
        assert!(ics.contains("LOCATION:221B Baker St\r\n"));
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
    }

    #[test]
    fn test_missing_address_gives_empty_location() {
        let mut event = meetup();
        event.address = None;
        let ics = to_ics_at(&event, stamp()).unwrap();
        assert!(ics.contains("\r\nLOCATION:\r\n"));
    }

    #[test]
    fn test_special_characters_escaped() {
        let mut event = meetup();
        event.title = "Food, drinks; fun".to_string();
        event.description = "Line one\nLine two".to_string();
        let ics = to_ics_at(&event, stamp()).unwrap();

        assert!(ics.contains("SUMMARY:Food\\, drinks\\; fun\r\n"));
        assert!(ics.contains("DESCRIPTION:Line one\\nLine two\r\n"));
    }

    #[test]
    fn test_invalid_date_is_error() {
        let event = Event::builder().id("x").title("Broken").raw_date("tbd").build().unwrap();
        let err = to_ics_at(&event, stamp()).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ics_file_name(&meetup()), "Meetup.ics");

        let mut event = meetup();
        event.title = "Q3/Q4: Review?".to_string();
        assert_eq!(ics_file_name(&event), "Q3_Q4_ Review_.ics");

        event.title = "   ".to_string();
        assert_eq!(ics_file_name(&event), "event.ics");
    }
}
