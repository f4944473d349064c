//! Six-week month grid with per-day event counts.

use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone};
use std::collections::HashMap;

use crate::models::event::Event;
use crate::utils::date::today;

/// Number of cells in a month grid (6 rows of 7 days)
pub const GRID_CELLS: usize = 42;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Header labels, Sunday first
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub event_count: usize,
}

/// The month being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Returns `None` for a month outside 1..=12 or a year chrono cannot represent
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move by `direction` months (negative goes back), wrapping across years.
    /// Stays put if the result would leave chrono's date range.
    pub fn change_month(&mut self, direction: i32) {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + direction as i64;
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;

        match i32::try_from(year).ok().and_then(|year| Self::new(year, month)) {
            Some(next) => *self = next,
            None => log::warn!(
                "Ignoring month change by {} from {}-{:02}",
                direction,
                self.year,
                self.month
            ),
        }
    }

    /// Header text such as "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// A built month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub cursor: MonthCursor,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// The six week rows, Sunday first
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    pub fn title(&self) -> String {
        self.cursor.title()
    }
}

/// Build the grid for `year`/`month` against the local clock and zone.
pub fn build(year: i32, month: u32, events: &[Event]) -> Result<CalendarGrid> {
    build_in(year, month, events, today(), &Local)
}

/// Build the grid for `year`/`month`, counting events by their day in `tz`.
pub fn build_in<Tz: TimeZone>(
    year: i32,
    month: u32,
    events: &[Event],
    today: NaiveDate,
    tz: &Tz,
) -> Result<CalendarGrid> {
    let cursor = MonthCursor::new(year, month)
        .ok_or_else(|| anyhow!("Invalid calendar month: {}-{}", year, month))?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid calendar month: {}-{}", year, month))?;
    let lead = Duration::days(first_of_month.weekday().num_days_from_sunday() as i64);
    let start = first_of_month.checked_sub_signed(lead).ok_or_else(|| {
        anyhow!(
            "Calendar grid for {}-{} runs past the supported date range",
            year,
            month
        )
    })?;

    let counts = count_by_day(events, tz);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            in_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            event_count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect::<Vec<_>>();

    if cells.len() != GRID_CELLS {
        return Err(anyhow!(
            "Calendar grid for {}-{} runs past the supported date range",
            year,
            month
        ));
    }

    Ok(CalendarGrid { cursor, cells })
}

fn count_by_day<Tz: TimeZone>(events: &[Event], tz: &Tz) -> HashMap<NaiveDate, usize> {
    let mut counts = HashMap::new();
    for day in events.iter().filter_map(|event| event.day_in(tz)) {
        *counts.entry(day).or_insert(0) += 1;
    }
    counts
}
