use chrono::{DateTime, Local};

use crate::models::event::Event;
use crate::models::settings::AppConfig;
use crate::models::view::{DisplayState, FetchStatus, ViewParams};
use crate::services::api::ApiError;
use crate::services::calendar_grid::MonthCursor;
use crate::services::store::EventStore;

/// Everything the UI remembers between frames apart from the events themselves.
///
/// Passed by reference into the view filter and the calendar grid on every
/// frame; nothing here is global.
#[derive(Debug, Clone)]
pub struct UiState {
    pub params: ViewParams,
    pub month: MonthCursor,
    pub fetch_status: FetchStatus,
    /// List requests sent but not yet answered
    pub lists_in_flight: usize,
    /// Ids with a delete request outstanding
    pub deleting: Vec<String>,
    /// Create requests sent but not yet answered
    pub creating: usize,
    pub last_refreshed: Option<DateTime<Local>>,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            params: ViewParams::new(config.default_date_filter, config.default_sort),
            month: MonthCursor::current(),
            fetch_status: FetchStatus::Pending,
            lists_in_flight: 0,
            deleting: Vec::new(),
            creating: 0,
            last_refreshed: None,
        }
    }

    pub fn display_state(&self, derived_len: usize) -> DisplayState {
        DisplayState::from_outcome(&self.fetch_status, derived_len)
    }

    pub fn list_started(&mut self) {
        self.lists_in_flight += 1;
        self.fetch_status = FetchStatus::Pending;
    }

    /// Apply a list response. Whichever response arrives last wins.
    ///
    /// Returns the user-facing error message on failure.
    pub fn list_finished(
        &mut self,
        store: &mut EventStore,
        result: Result<Vec<Event>, ApiError>,
    ) -> Option<String> {
        self.lists_in_flight = self.lists_in_flight.saturating_sub(1);

        match result {
            Ok(mut events) => {
                // Stable, so undated events stay in response order at the end
                events.sort_by_key(|event| (event.occurs_at.is_none(), event.occurs_at));
                store.replace_all(events);
                self.fetch_status = FetchStatus::Loaded;
                self.last_refreshed = Some(Local::now());
                None
            }
            Err(err) => {
                let message = err.user_message();
                self.fetch_status = FetchStatus::Failed(message.clone());
                Some(message)
            }
        }
    }

    pub fn delete_started(&mut self, id: &str) {
        self.deleting.push(id.to_string());
    }

    pub fn delete_finished(&mut self, id: &str) {
        self.deleting.retain(|pending| pending != id);
    }

    pub fn create_started(&mut self) {
        self.creating += 1;
    }

    pub fn create_finished(&mut self) {
        self.creating = self.creating.saturating_sub(1);
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.iter().any(|pending| pending == id)
    }

    pub fn is_busy(&self) -> bool {
        self.lists_in_flight > 0 || self.creating > 0 || !self.deleting.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::{DateFilter, SortKey};
    use chrono::{TimeZone, Utc};

    fn config() -> AppConfig {
        AppConfig {
            api_base_url: "https://example.com/prod".to_string(),
            default_date_filter: DateFilter::Upcoming,
            default_sort: SortKey::TitleDesc,
            ..AppConfig::default()
        }
    }

    fn event(id: &str, day: u32) -> Event {
        Event::new(id, id, Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()).unwrap()
    }

    #[test]
    fn test_new_uses_configured_defaults() {
        let state = UiState::new(&config());
        assert_eq!(state.params.date_filter, DateFilter::Upcoming);
        assert_eq!(state.params.sort_key, SortKey::TitleDesc);
        assert_eq!(state.display_state(0), DisplayState::Loading);
    }

    #[test]
    fn test_list_finished_sorts_by_date() {
        let mut state = UiState::new(&config());
        let mut store = EventStore::new();
        let undated = Event::builder()
            .id("undated")
            .title("Undated")
            .raw_date("soon")
            .build()
            .unwrap();

        state.list_started();
        let error = state.list_finished(
            &mut store,
            Ok(vec![undated, event("late", 20), event("early", 2)]),
        );

        assert!(error.is_none());
        let ids: Vec<&str> = store.all().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "undated"]);
        assert_eq!(state.fetch_status, FetchStatus::Loaded);
        assert_eq!(state.lists_in_flight, 0);
        assert!(state.last_refreshed.is_some());
    }

    #[test]
    fn test_list_failure_keeps_store() {
        let mut state = UiState::new(&config());
        let mut store = EventStore::new();
        store.replace_all(vec![event("kept", 1)]);

        state.list_started();
        let error = state.list_finished(
            &mut store,
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        );

        assert!(error.is_some());
        assert_eq!(store.len(), 1);
        assert!(matches!(state.display_state(1), DisplayState::Error(_)));
    }

    #[test]
    fn test_overlapping_lists_last_response_wins() {
        let mut state = UiState::new(&config());
        let mut store = EventStore::new();

        state.list_started();
        state.list_started();
        state.list_finished(&mut store, Ok(vec![event("second", 2)]));
        assert!(state.is_busy());
        state.list_finished(&mut store, Ok(vec![event("first", 1)]));

        assert!(!state.is_busy());
        assert_eq!(store.all()[0].id, "first");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_tracking() {
        let mut state = UiState::new(&config());
        state.delete_started("a");
        assert!(state.is_deleting("a"));
        assert!(state.is_busy());

        state.delete_finished("a");
        assert!(!state.is_deleting("a"));
        assert!(!state.is_busy());
    }
}
