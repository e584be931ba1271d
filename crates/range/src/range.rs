use chrono::NaiveDate;

use crate::constraint::add_days;
use crate::{MIN_RANGE_DAYS, minimum_allowed_start, parse_field};

/// The dates currently held by the picker. Lives only as long as the enclosing form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("start and end dates are required")]
    Missing,

    #[error("start date {start} must be after {today}")]
    StartNotAfterToday { start: NaiveDate, today: NaiveDate },

    #[error("end date {end} must be at least {days} days after start date {start}", days = MIN_RANGE_DAYS)]
    TooShort { start: NaiveDate, end: NaiveDate },
}

impl RangeError {
    pub fn message(&self, locale: &str) -> String {
        match self {
            Self::Missing => rust_i18n::t!("range_missing", locale = locale).to_string(),
            Self::StartNotAfterToday { .. } => {
                rust_i18n::t!("range_start_not_after_today", locale = locale).to_string()
            }
            Self::TooShort { .. } => {
                rust_i18n::t!("range_too_short", locale = locale, days = MIN_RANGE_DAYS)
                    .to_string()
            }
        }
    }
}

impl SelectedRange {
    /// Tomorrow through tomorrow plus the minimum span.
    pub fn initial(today: NaiveDate) -> Self {
        let start = minimum_allowed_start(today);

        Self {
            start: Some(start),
            end: Some(add_days(start, MIN_RANGE_DAYS)),
        }
    }

    /// Builds a range from raw form fields; unparsable values count as unset.
    pub fn from_fields(start: &str, end: &str) -> Self {
        Self {
            start: parse_field(start).ok().flatten(),
            end: parse_field(end).ok().flatten(),
        }
    }

    pub fn check(&self, today: NaiveDate) -> Result<(), RangeError> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(RangeError::Missing);
        };

        if start <= today {
            return Err(RangeError::StartNotAfterToday { start, today });
        }

        if (end - start).num_days() < MIN_RANGE_DAYS as i64 {
            return Err(RangeError::TooShort { start, end });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_initial_range() {
        let range = SelectedRange::initial(date(2024, 1, 9));
        assert_eq!(range.start, Some(date(2024, 1, 10)));
        assert_eq!(range.end, Some(date(2024, 1, 17)));
        assert!(range.check(date(2024, 1, 9)).is_ok());
    }

    #[test]
    fn test_from_fields_ignores_garbage() {
        let range = SelectedRange::from_fields("2024-01-10", "soon");
        assert_eq!(range.start, Some(date(2024, 1, 10)));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_check() {
        let today = date(2024, 1, 9);
        let range = |start, end| SelectedRange {
            start: Some(start),
            end: Some(end),
        };

        assert_eq!(
            SelectedRange::default().check(today),
            Err(RangeError::Missing)
        );
        assert_eq!(
            range(today, date(2024, 1, 20)).check(today),
            Err(RangeError::StartNotAfterToday {
                start: today,
                today
            })
        );
        assert_eq!(
            range(date(2024, 1, 10), date(2024, 1, 14)).check(today),
            Err(RangeError::TooShort {
                start: date(2024, 1, 10),
                end: date(2024, 1, 14)
            })
        );
        assert!(range(date(2024, 1, 10), date(2024, 1, 17)).check(today).is_ok());
    }

    #[test]
    fn test_range_error_messages() {
        assert_eq!(
            RangeError::Missing.message("ko"),
            "시작일과 종료일을 모두 선택해주세요."
        );
        let err = RangeError::TooShort {
            start: date(2024, 1, 10),
            end: date(2024, 1, 14),
        };
        assert_eq!(
            err.to_string(),
            "end date 2024-01-14 must be at least 7 days after start date 2024-01-10"
        );
        assert_eq!(err.message("ko"), "종료일은 시작일로부터 최소 7일 뒤로 설정해주세요.");
    }
}
