use chrono::NaiveDate;
use shiftsheet::core::grid::MonthGrid;
use shiftsheet::core::session::{GridMode, GridSession};
use shiftsheet::errors::AppError;
use shiftsheet::models::work_norm::WorkNorm;
use shiftsheet::sheet::import::ImportOutcome;
use shiftsheet::store::{MemoryNormStore, NormStore};

fn session_for(year: i32, month: u32, default_hours: f64) -> GridSession<MemoryNormStore> {
    let reference = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    GridSession::new(
        MonthGrid::for_month(reference),
        MemoryNormStore::new(),
        default_hours,
    )
}

#[test]
fn test_get_hours_defaults_when_no_entry_exists() {
    let session = session_for(2025, 3, 8.0);
    assert_eq!(session.get_hours(1, 10), 8.0);

    let zero_default = session_for(2025, 3, 0.0);
    assert_eq!(zero_default.get_hours(1, 10), 0.0);
}

#[test]
fn test_set_hours_is_a_noop_outside_edit_mode() {
    let mut session = session_for(2025, 3, 8.0);

    let applied = session.set_hours(1, 10, 6.5).unwrap();
    assert!(!applied);
    assert_eq!(session.get_hours(1, 10), 8.0);
    assert!(session.store().is_empty());
    assert!(!session.is_modified(1, 10));
}

#[test]
fn test_set_then_get_round_trips() {
    let mut session = session_for(2025, 3, 8.0);
    session.begin_edit();

    assert!(session.set_hours(1, 10, 6.5).unwrap());
    assert_eq!(session.get_hours(1, 10), 6.5);
    assert!(session.is_modified(1, 10));

    // other cells stay at the default and unmarked
    assert_eq!(session.get_hours(1, 11), 8.0);
    assert_eq!(session.get_hours(2, 10), 8.0);
    assert!(!session.is_modified(2, 10));
}

#[test]
fn test_repeated_writes_keep_one_entry_and_the_last_value() {
    let mut session = session_for(2025, 3, 8.0);
    session.begin_edit();

    session.set_hours(1, 10, 6.0).unwrap();
    session.set_hours(1, 10, 6.0).unwrap();
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.get_hours(1, 10), 6.0);

    session.set_hours(1, 10, 7.5).unwrap();
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.get_hours(1, 10), 7.5);
}

#[test]
fn test_set_hours_rejects_out_of_range_values() {
    let mut session = session_for(2025, 3, 8.0);
    session.begin_edit();

    assert!(matches!(
        session.set_hours(1, 10, 25.0),
        Err(AppError::InvalidHours(_))
    ));
    assert!(matches!(
        session.set_hours(1, 10, -1.0),
        Err(AppError::InvalidHours(_))
    ));
    assert!(session.store().is_empty());
}

#[test]
fn test_set_hours_rejects_days_outside_the_month() {
    let mut session = session_for(2025, 2, 8.0);
    session.begin_edit();

    assert!(matches!(
        session.set_hours(1, 29, 8.0),
        Err(AppError::InvalidDay(29))
    ));
    assert!(session.store().is_empty());
}

#[test]
fn test_save_clears_highlights_but_keeps_values() {
    let mut session = session_for(2025, 3, 8.0);
    session.begin_edit();
    session.set_hours(1, 10, 6.5).unwrap();

    session.save();

    assert_eq!(session.mode(), GridMode::Viewing);
    assert!(!session.is_modified(1, 10));
    assert_eq!(session.get_hours(1, 10), 6.5);
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_month_navigation_clears_highlights() {
    let mut session = session_for(2025, 3, 8.0);
    session.begin_edit();
    session.set_hours(1, 10, 6.5).unwrap();
    assert!(session.is_modified(1, 10));

    session.next_month();
    assert_eq!(session.grid().month(), 4);
    assert!(!session.is_modified(1, 10));
    // the edit stays in the store under its March date
    assert_eq!(session.store().len(), 1);

    session.prev_month();
    assert_eq!(session.grid().month(), 3);
    assert_eq!(session.get_hours(1, 10), 6.5);
    assert!(!session.is_modified(1, 10));
}

#[test]
fn test_apply_import_requires_edit_mode() {
    let mut session = session_for(2025, 3, 8.0);

    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let outcome = ImportOutcome {
        norms: vec![WorkNorm::modified(1, date, 7.0)],
        matched: 1,
        day_columns: 1,
    };

    assert!(matches!(
        session.apply_import(&outcome),
        Err(AppError::NotEditing)
    ));
    assert!(session.store().is_empty());

    session.begin_edit();
    session.apply_import(&outcome).unwrap();
    assert_eq!(session.get_hours(1, 1), 7.0);
    assert!(session.is_modified(1, 1));
}
