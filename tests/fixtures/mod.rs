// Test fixtures - reusable test data
// Provides consistent events and API payloads across all test files

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use event_board::models::event::Event;

/// Fixed dates so filters never depend on the real clock
pub mod dates {
    use super::*;

    /// The "today" every fixture is relative to: Friday, March 15 2024
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, title: &str, occurs_at: DateTime<Utc>) -> Event {
        Event::new(id, title, occurs_at).unwrap()
    }

    /// Event whose date text could not be parsed
    pub fn undated(id: &str, title: &str) -> Event {
        Event::builder()
            .id(id)
            .title(title)
            .raw_date("next Tuesday-ish")
            .build()
            .unwrap()
    }

    /// Meetup with a location, used for export checks
    pub fn meetup() -> Event {
        Event::builder()
            .id("evt-meetup")
            .title("Meetup")
            .description("Monthly Rust meetup")
            .address("221B Baker St")
            .occurs_at(dates::at(2024, 3, 15, 18))
            .created_by_name("Ada")
            .build()
            .unwrap()
    }

    /// Tomorrow's gala and yesterday's fair
    pub fn gala_and_fair() -> Vec<Event> {
        vec![
            event("gala", "Gala", dates::at(2024, 3, 16, 19)),
            event("fair", "Fair", dates::at(2024, 3, 14, 10)),
        ]
    }

    /// A mixed board around `dates::today()`
    pub fn board() -> Vec<Event> {
        vec![
            meetup(),
            event("fair", "Spring Fair", dates::at(2024, 3, 14, 10)),
            event("gala", "charity gala", dates::at(2024, 3, 16, 19)),
            event("concert", "Concert", dates::at(2024, 4, 2, 20)),
            event("lunch", "Team Lunch", dates::at(2024, 3, 15, 12)),
            undated("mystery", "Mystery Event"),
        ]
    }
}

/// Response bodies as the events API sends them
pub mod payloads {
    pub const BARE_ARRAY: &str = r#"[
        {"event_id": "a1", "title": "Spring Gala", "description": "Dinner", "date": "2024-04-20T19:30:00Z", "address": "Town Hall", "created_by_name": "Anonymous User"},
        {"id": "b2", "title": "Book Fair", "description": "Used books", "event_date": "2024-04-02"}
    ]"#;

    pub const STRING_ENVELOPE: &str = r#"{"statusCode": 200, "headers": {"Access-Control-Allow-Origin": "*"}, "body": "[{\"event_id\": \"c3\", \"title\": \"Hackathon\", \"date\": \"2024-05-01T09:00:00Z\"}]"}"#;

    pub const CREATED: &str = r#"{"message": "Event created successfully", "event_id": "new-42"}"#;
}
