use chrono::{Days, NaiveDate};

/// Minimum number of days between the start date and the end date.
pub const MIN_RANGE_DAYS: u64 = 7;

/// Earliest start date a user may pick: tomorrow.
pub fn minimum_allowed_start(today: NaiveDate) -> NaiveDate {
    add_days(today, 1)
}

/// Earliest end date for the given start.
///
/// Without a start date the end field is anchored to the default start
/// (tomorrow) plus [`MIN_RANGE_DAYS`], so it always has a lower bound.
pub fn minimum_allowed_end(start: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
    match start {
        Some(start) => add_days(start, MIN_RANGE_DAYS),
        None => add_days(minimum_allowed_start(today), MIN_RANGE_DAYS),
    }
}

/// Saturates at [`NaiveDate::MAX`] instead of panicking on overflow.
pub(crate) fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Bounds handed to a date field, mirroring the `min`/`max` attributes of the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateConstraints {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

impl DateConstraints {
    pub fn min(min_date: NaiveDate) -> Self {
        Self {
            min_date: Some(min_date),
            max_date: None,
        }
    }
}
