use chrono::{NaiveDate, Weekday};
use shiftsheet::core::grid::MonthGrid;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_day_counts_cover_all_month_lengths() {
    assert_eq!(MonthGrid::for_month(ymd(2025, 1, 15)).day_count(), 31);
    assert_eq!(MonthGrid::for_month(ymd(2025, 4, 1)).day_count(), 30);
    assert_eq!(MonthGrid::for_month(ymd(2025, 2, 10)).day_count(), 28);
    // leap February
    assert_eq!(MonthGrid::for_month(ymd(2024, 2, 10)).day_count(), 29);
    assert_eq!(MonthGrid::for_month(ymd(2000, 2, 1)).day_count(), 29);
    // century non-leap
    assert_eq!(MonthGrid::for_month(ymd(1900, 2, 1)).day_count(), 28);
}

#[test]
fn test_days_are_ordered_and_one_based() {
    let grid = MonthGrid::for_month(ymd(2025, 6, 20));
    let days: Vec<u32> = grid.days().iter().map(|d| d.day).collect();
    assert_eq!(days, (1..=30).collect::<Vec<u32>>());
}

#[test]
fn test_weekend_flags_match_gregorian_weekdays() {
    // January 2025 starts on a Wednesday
    let grid = MonthGrid::for_month(ymd(2025, 1, 1));

    let day = |n: u32| &grid.days()[(n - 1) as usize];

    assert_eq!(day(1).weekday, Weekday::Wed);
    assert!(!day(1).weekend);

    assert_eq!(day(4).weekday, Weekday::Sat);
    assert!(day(4).weekend);
    assert_eq!(day(5).weekday, Weekday::Sun);
    assert!(day(5).weekend);
    assert!(!day(6).weekend);

    let weekend_count = grid.days().iter().filter(|d| d.weekend).count();
    assert_eq!(weekend_count, 8);
}

#[test]
fn test_date_of_resolves_only_days_in_month() {
    let feb = MonthGrid::for_month(ymd(2025, 2, 14));

    assert_eq!(feb.date_of(1), Some(ymd(2025, 2, 1)));
    assert_eq!(feb.date_of(28), Some(ymd(2025, 2, 28)));
    assert_eq!(feb.date_of(29), None);
    assert_eq!(feb.date_of(0), None);
    assert_eq!(feb.date_of(31), None);

    let leap_feb = MonthGrid::for_month(ymd(2024, 2, 1));
    assert_eq!(leap_feb.date_of(29), Some(ymd(2024, 2, 29)));
}

#[test]
fn test_navigation_shifts_one_month_and_clamps() {
    let jan = MonthGrid::for_month(ymd(2025, 1, 31));

    let feb = jan.next();
    assert_eq!(feb.year(), 2025);
    assert_eq!(feb.month(), 2);
    assert_eq!(feb.day_count(), 28);

    let dec = jan.prev();
    assert_eq!(dec.year(), 2024);
    assert_eq!(dec.month(), 12);
    assert_eq!(dec.day_count(), 31);
}

#[test]
fn test_navigation_across_year_boundary() {
    let dec = MonthGrid::for_month(ymd(2025, 12, 15));
    let jan = dec.next();
    assert_eq!((jan.year(), jan.month()), (2026, 1));

    let back = jan.prev();
    assert_eq!((back.year(), back.month()), (2025, 12));
}

#[test]
fn test_month_label() {
    assert_eq!(MonthGrid::for_month(ymd(2026, 3, 5)).label(), "March 2026");
    assert_eq!(MonthGrid::for_month(ymd(2024, 2, 29)).label(), "February 2024");
}
