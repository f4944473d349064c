//! Derivation of the display list: search, date filter, then sort.

use chrono::{Local, NaiveDate, TimeZone};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

use crate::models::event::Event;
use crate::models::view::{DateFilter, SortKey, ViewParams};
use crate::utils::date::today;

/// Filter and sort `events` for display using the local clock and zone.
pub fn derive<'a>(events: &'a [Event], params: &ViewParams) -> Vec<&'a Event> {
    derive_in(events, params, today(), &Local)
}

/// Filter and sort `events` relative to `today` in `tz`.
///
/// The search term and the date filter both narrow the set and commute; the
/// sort is stable, so ties keep their input order.
pub fn derive_in<'a, Tz: TimeZone>(
    events: &'a [Event],
    params: &ViewParams,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Event> {
    let term = params.normalized_term();

    let mut derived: Vec<&Event> = events
        .iter()
        .filter(|event| term.as_deref().map_or(true, |t| matches_term(event, t)))
        .filter(|event| passes_date_filter(event, params.date_filter, today, tz))
        .collect();

    sort_events(&mut derived, params.sort_key);
    derived
}

/// Case-insensitive substring match over title, description and address.
/// `term` must already be lower-cased.
pub fn matches_term(event: &Event, term: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(term);

    contains(&event.title)
        || contains(&event.description)
        || event.address.as_deref().is_some_and(contains)
}

fn passes_date_filter<Tz: TimeZone>(
    event: &Event,
    filter: DateFilter,
    today: NaiveDate,
    tz: &Tz,
) -> bool {
    match filter {
        DateFilter::All => true,
        DateFilter::Upcoming => event.day_in(tz).is_some_and(|day| day >= today),
        DateFilter::Today => event.day_in(tz) == Some(today),
    }
}

fn sort_events(events: &mut [&Event], key: SortKey) {
    match key {
        SortKey::DateAsc => events.sort_by(|a, b| compare_dates(a, b, false)),
        SortKey::DateDesc => events.sort_by(|a, b| compare_dates(a, b, true)),
        SortKey::TitleAsc => {
            let collator = TitleCollator::new();
            events.sort_by(|a, b| collator.compare(&a.title, &b.title));
        }
        SortKey::TitleDesc => {
            let collator = TitleCollator::new();
            events.sort_by(|a, b| collator.compare(&b.title, &a.title));
        }
    }
}

/// Events without a valid date go last regardless of direction.
fn compare_dates(a: &Event, b: &Event, descending: bool) -> Ordering {
    match (a.occurs_at, b.occurs_at) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Unicode collation for titles (root locale, tertiary strength).
///
/// Base letters decide first, so "Éclair" sorts between "Eagle" and "Zoo";
/// accents and then case only break ties, lowercase first.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                log::warn!(
                    "Unicode collation unavailable, sorting titles by code point: {}",
                    err
                );
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| b.cmp(a)),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles with a fresh [`TitleCollator`]
pub fn collate(a: &str, b: &str) -> Ordering {
    TitleCollator::new().compare(a, b)
}
