use crate::{Field, MIN_RANGE_DAYS, ValidationErrorCode};

/// Helper text shown under the end date field for a validation code.
pub fn error_message(code: ValidationErrorCode, locale: &str) -> String {
    match code {
        ValidationErrorCode::MinDate | ValidationErrorCode::MaxDate => {
            rust_i18n::t!("end_date_too_early", locale = locale, days = MIN_RANGE_DAYS).to_string()
        }
        ValidationErrorCode::InvalidDate => {
            rust_i18n::t!("invalid_date_format", locale = locale).to_string()
        }
        ValidationErrorCode::None => String::new(),
    }
}

pub fn field_label(field: Field, locale: &str) -> String {
    match field {
        Field::Start => rust_i18n::t!("start_date", locale = locale).to_string(),
        Field::End => rust_i18n::t!("end_date", locale = locale).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_range_codes_share_one_message() {
        assert_eq!(
            error_message(ValidationErrorCode::MinDate, "ko"),
            error_message(ValidationErrorCode::MaxDate, "ko")
        );
        assert_eq!(
            error_message(ValidationErrorCode::MinDate, "ko"),
            "종료일은 시작일로부터 최소 7일 뒤로 설정해주세요."
        );
    }

    #[test]
    fn test_invalid_date_message_differs() {
        let invalid = error_message(ValidationErrorCode::InvalidDate, "ko");
        assert_eq!(invalid, "유효하지 않은 날짜 형식입니다.");
        assert_ne!(invalid, error_message(ValidationErrorCode::MinDate, "ko"));
    }

    #[test]
    fn test_no_error_or_unknown_code_is_empty() {
        assert_eq!(error_message(ValidationErrorCode::None, "ko"), "");
        assert_eq!(
            error_message(serde_json::from_str("\"disableFuture\"").unwrap(), "ko"),
            ""
        );
    }

    #[test]
    fn test_every_error_code_has_a_message_in_every_locale() {
        for locale in ["ko", "en"] {
            for code in ValidationErrorCode::VARIANTS {
                assert_eq!(error_message(*code, locale).is_empty(), !code.is_error());
            }
        }
    }

    #[test]
    fn test_english_messages() {
        assert_eq!(
            error_message(ValidationErrorCode::MaxDate, "en"),
            "The end date must be at least 7 days after the start date."
        );
        assert_eq!(field_label(Field::Start, "en"), "Start date");
    }

    #[test]
    fn test_labels_default_to_korean() {
        assert_eq!(field_label(Field::Start, "ko"), "시작일");
        assert_eq!(field_label(Field::End, "ko"), "종료일");
        assert_eq!(field_label(Field::End, "fr"), "종료일");
    }
}
