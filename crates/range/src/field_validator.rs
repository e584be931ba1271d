use chrono::NaiveDate;

use crate::{DateConstraints, ValidationErrorCode};

/// Wire format of `<input type="date">` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation performed by the date widget itself. The selector only consumes the result.
pub trait DateFieldValidator {
    fn validate(&self, value: &str, constraints: &DateConstraints) -> ValidationErrorCode;
}

/// Parses a raw field value. An empty field is a cleared date, not an error.
pub fn parse_field(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some)
}

pub fn format_field(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Applies the same checks a native date input runs against its `min`/`max` attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDateValidator;

impl DateFieldValidator for NativeDateValidator {
    fn validate(&self, value: &str, constraints: &DateConstraints) -> ValidationErrorCode {
        let date = match parse_field(value) {
            Ok(Some(date)) => date,
            Ok(None) => return ValidationErrorCode::None,
            Err(_) => return ValidationErrorCode::InvalidDate,
        };

        if constraints.min_date.is_some_and(|min| date < min) {
            return ValidationErrorCode::MinDate;
        }

        if constraints.max_date.is_some_and(|max| date > max) {
            return ValidationErrorCode::MaxDate;
        }

        ValidationErrorCode::None
    }
}
