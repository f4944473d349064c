// Event module
// Canonical event record as held by the event store

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::utils::date::{local_day, parse_timestamp};

/// Fixed length used when exporting an event to a calendar.
pub const EXPORT_DURATION_MINUTES: i64 = 60;

/// Event announced through the events API, normalized on ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Parsed start instant; `None` when `raw_date` could not be parsed
    pub occurs_at: Option<DateTime<Utc>>,
    /// Date text exactly as received
    pub raw_date: String,
    pub address: Option<String>,
    pub created_by_name: Option<String>,
}

impl Event {
    /// Create an event with the required fields.
    ///
    /// # Examples
    /// ```
    /// use event_board::models::event::Event;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let at = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
    /// let event = Event::new("evt-1", "Meetup", at).unwrap();
    /// assert_eq!(event.raw_date, "2024-03-15T18:00:00+00:00");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        occurs_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        Self::builder()
            .id(id)
            .title(title)
            .occurs_at(occurs_at)
            .build()
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Calendar day of the event in `tz`, if the date is valid
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<chrono::NaiveDate> {
        self.occurs_at.as_ref().map(|at| local_day(at, tz))
    }

    /// Start and end of the fixed one-hour export window
    pub fn export_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.occurs_at
            .map(|start| (start, start + Duration::minutes(EXPORT_DURATION_MINUTES)))
    }

    /// Address, when present and not blank
    pub fn address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }

    /// Creator name worth showing; the API's anonymous placeholder is hidden
    pub fn display_creator(&self) -> Option<&str> {
        self.created_by_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != "Anonymous User")
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    occurs_at: Option<DateTime<Utc>>,
    raw_date: Option<String>,
    address: Option<String>,
    created_by_name: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the start instant; `raw_date` defaults to its RFC 3339 form
    pub fn occurs_at(mut self, occurs_at: DateTime<Utc>) -> Self {
        self.occurs_at = Some(occurs_at);
        self
    }

    /// Set the date from wire text, parsing it in the local time zone
    pub fn raw_date(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.occurs_at = parse_timestamp(&raw);
        self.raw_date = Some(raw);
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn created_by_name(mut self, name: impl Into<String>) -> Self {
        self.created_by_name = Some(name.into());
        self
    }

    /// Build the event; only the id is mandatory
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        if id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        let raw_date = self
            .raw_date
            .or_else(|| self.occurs_at.map(|at| at.to_rfc3339()))
            .unwrap_or_default();

        Ok(Event {
            id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            occurs_at: self.occurs_at,
            raw_date,
            address: self.address,
            created_by_name: self.created_by_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new("a1", "Meetup", sample_time()).unwrap();
        assert_eq!(event.id, "a1");
        assert_eq!(event.title, "Meetup");
        assert_eq!(event.occurs_at, Some(sample_time()));
        assert!(event.address.is_none());
    }

    #[test]
    fn test_builder_missing_id() {
        let result = Event::builder().title("Meetup").build();
        assert_eq!(result.unwrap_err(), "Event id is required");
    }

    #[test]
    fn test_builder_blank_id() {
        let result = Event::builder().id("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_unparseable_date_is_kept() {
        let event = Event::builder()
            .id("a1")
            .title("Broken")
            .raw_date("sometime soon")
            .build()
            .unwrap();

        assert!(event.occurs_at.is_none());
        assert_eq!(event.raw_date, "sometime soon");
        assert!(event.export_window().is_none());
    }

    #[test]
    fn test_export_window_is_one_hour() {
        let event = Event::new("a1", "Meetup", sample_time()).unwrap();
        let (start, end) = event.export_window().unwrap();
        assert_eq!(end - start, Duration::hours(1));
    }

    #[test]
    fn test_day_in_zone() {
        let event = Event::new(
            "a1",
            "Late",
            Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap(),
        )
        .unwrap();
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(event.day_in(&tz), NaiveDate::from_ymd_opt(2024, 3, 16));
        assert_eq!(event.day_in(&Utc), NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_display_creator_hides_anonymous() {
        let anonymous = Event::builder()
            .id("a1")
            .created_by_name("Anonymous User")
            .build()
            .unwrap();
        assert!(anonymous.display_creator().is_none());

        let named = Event::builder()
            .id("a2")
            .created_by_name("Dana")
            .build()
            .unwrap();
        assert_eq!(named.display_creator(), Some("Dana"));
    }

    #[test]
    fn test_blank_address_is_absent() {
        let event = Event::builder().id("a1").address("   ").build().unwrap();
        assert!(event.address().is_none());
    }
}
