// View module
// Parameters the UI passes to the view filter, and the list display state

use serde::{Deserialize, Serialize};

/// Which events to keep relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    All,
    Upcoming,
    Today,
}

impl DateFilter {
    pub const ALL: [DateFilter; 3] = [DateFilter::All, DateFilter::Upcoming, DateFilter::Today];

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::All => "All Events",
            DateFilter::Upcoming => "Upcoming",
            DateFilter::Today => "Today",
        }
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateAsc,
    DateDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::DateAsc,
        SortKey::DateDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateAsc => "Date (earliest first)",
            SortKey::DateDesc => "Date (latest first)",
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
        }
    }
}

/// Search, date filter and sort chosen in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub search_term: String,
    pub date_filter: DateFilter,
    pub sort_key: SortKey,
}

impl ViewParams {
    pub fn new(date_filter: DateFilter, sort_key: SortKey) -> Self {
        Self {
            search_term: String::new(),
            date_filter,
            sort_key,
        }
    }

    /// Search term trimmed and lower-cased; `None` when blank
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        (!term.is_empty()).then(|| term.to_lowercase())
    }
}

/// Outcome of the most recent list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// What the event list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Loaded,
    Empty,
    Error(String),
}

impl DisplayState {
    /// Display state for a fetch outcome and the size of the derived list
    pub fn from_outcome(status: &FetchStatus, derived_len: usize) -> Self {
        match status {
            FetchStatus::Pending => DisplayState::Loading,
            FetchStatus::Failed(message) => DisplayState::Error(message.clone()),
            FetchStatus::Loaded if derived_len == 0 => DisplayState::Empty,
            FetchStatus::Loaded => DisplayState::Loaded,
        }
    }
}
