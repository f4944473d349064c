// Property-based tests for the view filter and the month grid
// Random boards and months, checked against the guarantees the UI relies on

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use event_board::models::event::Event;
use event_board::models::view::{DateFilter, SortKey, ViewParams};
use event_board::services::calendar_grid::{build_in, MonthCursor, GRID_CELLS};
use event_board::services::view_filter::{collate, derive_in};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

/// Events scattered up to 60 days either side of `today()`, some undated
fn arb_board() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,12}",
            "[a-z ]{0,20}",
            prop::option::of(-60i64..60),
            0u32..24,
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, description, offset, hour))| {
                let builder = Event::builder()
                    .id(format!("evt-{}", i))
                    .title(title)
                    .description(description);
                let builder = match offset {
                    Some(days) => {
                        let at = Utc
                            .from_utc_datetime(&today().and_hms_opt(hour, 0, 0).unwrap())
                            + Duration::days(days);
                        builder.occurs_at(at)
                    }
                    None => builder.raw_date("not a date"),
                };
                builder.build().unwrap()
            })
            .collect()
    })
}

fn arb_filter() -> impl Strategy<Value = DateFilter> {
    prop::sample::select(DateFilter::ALL.to_vec())
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn ids(events: &[&Event]) -> Vec<String> {
    let mut ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
    ids.sort();
    ids
}

proptest! {
    /// Property: no search and no date filter keeps every event, ordered by title
    #[test]
    fn prop_all_by_title_is_a_sorted_permutation(board in arb_board()) {
        let params = ViewParams::new(DateFilter::All, SortKey::TitleAsc);
        let derived = derive_in(&board, &params, today(), &Utc);

        prop_assert_eq!(derived.len(), board.len());
        for pair in derived.windows(2) {
            let order = collate(&pair[0].title, &pair[1].title);
            prop_assert_ne!(order, std::cmp::Ordering::Greater);
        }
    }

    /// Property: every derived event contains the search term somewhere
    #[test]
    fn prop_search_only_keeps_matches(board in arb_board(), term in "[a-z]{1,3}") {
        let params = ViewParams {
            search_term: term.clone(),
            ..ViewParams::default()
        };
        let derived = derive_in(&board, &params, today(), &Utc);

        for event in &derived {
            let haystack = format!("{} {}", event.title, event.description).to_lowercase();
            prop_assert!(haystack.contains(&term));
        }
        let excluded = board
            .iter()
            .filter(|e| !derived.iter().any(|d| d.id == e.id));
        for event in excluded {
            prop_assert!(!event.title.to_lowercase().contains(&term));
            prop_assert!(!event.description.to_lowercase().contains(&term));
        }
    }

    /// Property: Today is exactly the events dated today, and Upcoming contains it
    #[test]
    fn prop_today_within_upcoming(board in arb_board(), sort in arb_sort()) {
        let today_params = ViewParams::new(DateFilter::Today, sort);
        let upcoming_params = ViewParams::new(DateFilter::Upcoming, sort);
        let today_list = derive_in(&board, &today_params, today(), &Utc);
        let upcoming = derive_in(&board, &upcoming_params, today(), &Utc);

        let expected = board.iter().filter(|e| e.day_in(&Utc) == Some(today())).count();
        prop_assert_eq!(today_list.len(), expected);
        for event in &today_list {
            prop_assert!(upcoming.iter().any(|u| u.id == event.id));
        }
    }

    /// Property: search and date filter commute, so the sort key never changes membership
    #[test]
    fn prop_sort_does_not_change_membership(
        board in arb_board(),
        filter in arb_filter(),
        a in arb_sort(),
        b in arb_sort(),
    ) {
        let first = derive_in(&board, &ViewParams::new(filter, a), today(), &Utc);
        let second = derive_in(&board, &ViewParams::new(filter, b), today(), &Utc);
        prop_assert_eq!(ids(&first), ids(&second));
    }

    /// Property: grids are always 42 cells starting on a Sunday, and count every
    /// dated event that falls inside the window
    #[test]
    fn prop_grid_shape_and_counts(
        board in arb_board(),
        year in 1990..2100i32,
        month in 1..=12u32,
    ) {
        let grid = build_in(year, month, &board, today(), &Utc).unwrap();

        prop_assert_eq!(grid.cells.len(), GRID_CELLS);
        prop_assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun);
        let first_cell = &grid.cells[0];
        prop_assert!(first_cell.date.day() == 1 || !first_cell.in_current_month);

        let first = grid.cells[0].date;
        let last = grid.cells[GRID_CELLS - 1].date;
        let in_window = board
            .iter()
            .filter_map(|e| e.day_in(&Utc))
            .filter(|day| *day >= first && *day <= last)
            .count();
        let counted: usize = grid.cells.iter().map(|c| c.event_count).sum();
        prop_assert_eq!(counted, in_window);

        let todays = grid.cells.iter().filter(|c| c.is_today).count();
        let expected = usize::from(today() >= first && today() <= last);
        prop_assert_eq!(todays, expected);
    }

    /// Property: moving forward then back returns to the same month
    #[test]
    fn prop_change_month_round_trips(
        year in 1900..2200i32,
        month in 1..=12u32,
        step in -500i32..500,
    ) {
        let start = MonthCursor::new(year, month).unwrap();
        let mut cursor = start;
        cursor.change_month(step);
        prop_assert!((1..=12).contains(&cursor.month()));
        cursor.change_month(-step);
        prop_assert_eq!(cursor, start);
    }
}
