use chrono::{Datelike, Duration, NaiveDate, Weekday};
use gart::error::ArtError;
use gart::window::{cell_for_index, DateWindow, GRID_WEEKS, WINDOW_DAYS};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn window_shape_holds_for_every_weekday() {
    let sunday = day(2024, 6, 16);
    for offset in 0..7 {
        let today = sunday + Duration::days(offset);
        let window = DateWindow::ending_on_or_before(today).unwrap();

        assert_eq!(window.len(), 371, "today = {today}");
        assert_eq!(window.end.weekday(), Weekday::Sat, "today = {today}");
        assert_eq!(window.start.weekday(), Weekday::Sun, "today = {today}");
        assert_eq!(window.end - window.start, Duration::days(370));
        assert!(window.end <= today);
        assert!(today - window.end < Duration::days(7));
    }
}

#[test]
fn sunday_through_friday_fall_back_to_previous_saturday() {
    for d in 16..=21 {
        let window = DateWindow::ending_on_or_before(day(2024, 6, d)).unwrap();
        assert_eq!(window.end, day(2024, 6, 15));
        assert_eq!(window.start, day(2023, 6, 11));
    }
}

#[test]
fn saturday_window_ends_today() {
    let today = day(2024, 6, 22);
    let window = DateWindow::ending_on_or_before(today).unwrap();
    assert_eq!(window.end, today);
    assert_eq!(window.eve().unwrap(), day(2023, 6, 17));
}

#[test]
fn days_iterate_in_ascending_order() {
    let window = DateWindow::ending_on_or_before(day(2025, 1, 1)).unwrap();
    let days: Vec<_> = window.days().collect();
    assert_eq!(days.len(), WINDOW_DAYS);
    assert_eq!(days[0], (0, window.start));
    assert_eq!(days[WINDOW_DAYS - 1], (WINDOW_DAYS - 1, window.end));
    assert!(days.windows(2).all(|w| w[1].1 - w[0].1 == Duration::days(1)));
    assert_eq!(window.weeks(), GRID_WEEKS);
}

#[test]
fn day_to_cell_mapping_is_a_bijection() {
    let mut seen = HashSet::new();
    for index in 0..WINDOW_DAYS {
        let cell = cell_for_index(index);
        assert!(cell.row < 7);
        assert!(cell.column < GRID_WEEKS);
        assert_eq!(cell.column * 7 + cell.row, index);
        assert!(seen.insert(cell));
    }
    assert_eq!(seen.len(), 7 * GRID_WEEKS);
}

#[test]
fn row_matches_weekday_of_the_day() {
    let window = DateWindow::ending_on_or_before(day(2024, 3, 5)).unwrap();
    for (index, date) in window.days() {
        let row = cell_for_index(index).row as u32;
        assert_eq!(row, date.weekday().num_days_from_sunday());
    }
}

#[test]
fn dates_near_the_calendar_floor_are_rejected() {
    for offset in [0, 3, 300, 369] {
        let today = NaiveDate::MIN + Duration::days(offset);
        assert!(
            matches!(DateWindow::ending_on_or_before(today), Err(ArtError::InvalidDate(_))),
            "today = {today}"
        );
    }
}

#[test]
fn plan_for_far_past_today_is_an_error_not_a_panic() {
    let today = NaiveDate::MIN + Duration::days(10);
    assert!(gart::paint::Plan::new("HI", today).is_err());
}
