use std::cell::RefCell;

use chrono::NaiveDate;
use rangepick_range::{
    Field, FixedClock, NativeDateValidator, RangeSelector, SelectedRange, ValidationErrorCode,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_short_range_warns_but_still_forwards_end_date() {
    let clock = FixedClock(date(2024, 1, 1));
    let ends = RefCell::new(vec![]);

    let mut selector = RangeSelector::new(&clock, |_| {}, |d| ends.borrow_mut().push(d));
    selector.commit_start("2024-01-10", &NativeDateValidator);
    selector.commit_end("2024-01-14", &NativeDateValidator);

    assert_eq!(selector.error(), ValidationErrorCode::MinDate);
    assert_eq!(
        selector.error_message("ko"),
        "종료일은 시작일로부터 최소 7일 뒤로 설정해주세요."
    );
    assert!(selector.range_status().is_err());
    drop(selector);

    assert_eq!(*ends.borrow(), vec![Some(date(2024, 1, 14))]);
}

#[test]
fn test_exact_minimum_span_has_no_helper_text() {
    let clock = FixedClock(date(2024, 1, 1));
    let mut selector = RangeSelector::new(&clock, |_| {}, |_| {});

    selector.commit_start("2024-01-10", &NativeDateValidator);
    selector.commit_end("2024-01-17", &NativeDateValidator);

    assert_eq!(selector.error(), ValidationErrorCode::None);
    assert_eq!(selector.error_message("ko"), "");
    assert!(selector.range_status().is_ok());
}

#[test]
fn test_clearing_start_falls_back_to_default_end_anchor() {
    let clock = FixedClock(date(2024, 1, 1));
    let starts = RefCell::new(vec![]);

    let mut selector = RangeSelector::new(&clock, |d| starts.borrow_mut().push(d), |_| {})
        .with_range(SelectedRange {
            start: Some(date(2024, 2, 1)),
            end: Some(date(2024, 2, 8)),
        });
    assert_eq!(selector.minimum_allowed_end(), date(2024, 2, 8));

    selector.commit_start("", &NativeDateValidator);

    assert_eq!(selector.start(), None);
    assert_eq!(selector.minimum_allowed_end(), date(2024, 1, 9));
    assert_eq!(selector.value(Field::Start), "");
    assert_eq!(selector.error(), ValidationErrorCode::None);
    drop(selector);

    assert_eq!(*starts.borrow(), vec![None]);
}

#[test]
fn test_moving_start_later_flags_existing_end() {
    let clock = FixedClock(date(2024, 1, 1));
    let mut selector = RangeSelector::new(&clock, |_| {}, |_| {});
    assert!(selector.is_valid());

    selector.commit_start("2024-01-05", &NativeDateValidator);

    assert_eq!(selector.end(), Some(date(2024, 1, 9)));
    assert_eq!(selector.error(), ValidationErrorCode::MinDate);

    selector.commit_end("2024-01-12", &NativeDateValidator);
    assert!(selector.is_valid());
}

#[test]
fn test_minimum_start_is_one_day_after_today_for_any_clock() {
    let mut today = date(2023, 12, 25);
    while today < date(2024, 3, 5) {
        let clock = FixedClock(today);
        let selector = RangeSelector::new(&clock, |_| {}, |_| {});
        assert_eq!((selector.minimum_allowed_start() - today).num_days(), 1);
        today = today.succ_opt().unwrap();
    }
}
