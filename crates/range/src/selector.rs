use chrono::NaiveDate;

use crate::{
    Clock, DateConstraints, DateFieldValidator, Field, RangeError, SelectedRange,
    ValidationErrorCode, error_message, field_label, format_field, minimum_allowed_end,
    minimum_allowed_start, parse_field,
};

pub type DateCallback<'a> = Box<dyn FnMut(Option<NaiveDate>) + 'a>;

/// View model behind the two-field date range picker.
///
/// Holds the selected dates and the last validation code reported for the end
/// field. Every committed value is forwarded to the parent through the callbacks,
/// whether or not it satisfies the range constraint; a violation only changes the
/// helper text.
pub struct RangeSelector<'a> {
    clock: &'a dyn Clock,
    range: SelectedRange,
    error: ValidationErrorCode,
    on_change_start_date: DateCallback<'a>,
    on_change_end_date: DateCallback<'a>,
}

impl<'a> RangeSelector<'a> {
    pub fn new(
        clock: &'a dyn Clock,
        on_change_start_date: impl FnMut(Option<NaiveDate>) + 'a,
        on_change_end_date: impl FnMut(Option<NaiveDate>) + 'a,
    ) -> Self {
        Self {
            range: SelectedRange::initial(clock.today()),
            clock,
            error: ValidationErrorCode::None,
            on_change_start_date: Box::new(on_change_start_date),
            on_change_end_date: Box::new(on_change_end_date),
        }
    }

    /// Restores dates carried over from a previous render without notifying the parent.
    pub fn with_range(mut self, range: SelectedRange) -> Self {
        self.range = range;
        self
    }

    pub fn range(&self) -> &SelectedRange {
        &self.range
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.range.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.range.end
    }

    pub fn error(&self) -> ValidationErrorCode {
        self.error
    }

    pub fn is_valid(&self) -> bool {
        !self.error.is_error()
    }

    pub fn on_start_change(&mut self, date: Option<NaiveDate>) {
        tracing::debug!(start = ?date, "start date changed");

        self.range.start = date;
        (self.on_change_start_date)(date);
    }

    pub fn on_end_change(&mut self, date: Option<NaiveDate>) {
        tracing::debug!(end = ?date, "end date changed");

        self.range.end = date;
        (self.on_change_end_date)(date);
    }

    pub fn on_validation_error(&mut self, code: ValidationErrorCode) {
        if code != self.error {
            tracing::debug!(from = %self.error, to = %code, "end date validation changed");
        }

        self.error = code;
    }

    pub fn minimum_allowed_start(&self) -> NaiveDate {
        minimum_allowed_start(self.clock.today())
    }

    pub fn minimum_allowed_end(&self) -> NaiveDate {
        minimum_allowed_end(self.range.start, self.clock.today())
    }

    pub fn constraints(&self, field: Field) -> DateConstraints {
        match field {
            Field::Start => DateConstraints::min(self.minimum_allowed_start()),
            Field::End => DateConstraints::min(self.minimum_allowed_end()),
        }
    }

    pub fn error_message(&self, locale: &str) -> String {
        error_message(self.error, locale)
    }

    pub fn label(&self, field: Field, locale: &str) -> String {
        field_label(field, locale)
    }

    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Start => format_field(self.range.start),
            Field::End => format_field(self.range.end),
        }
    }

    pub fn range_status(&self) -> Result<(), RangeError> {
        self.range.check(self.clock.today())
    }

    /// Commits the raw value typed or picked in the start field.
    ///
    /// An unparsable value clears the start. The end field is then revalidated
    /// against its new minimum, as the widget does when its `min` changes.
    pub fn commit_start(&mut self, raw: &str, validator: &dyn DateFieldValidator) {
        let date = parse_field(raw).unwrap_or_else(|err| {
            tracing::debug!(raw, %err, "unparsable start date, clearing it");
            None
        });
        self.on_start_change(date);

        let end = self.value(Field::End);
        let code = validator.validate(&end, &self.constraints(Field::End));
        self.on_validation_error(code);
        self.log_range_status();
    }

    /// Commits the raw value of the end field. Validation runs first; a parsed
    /// date is forwarded even when it violates the range constraint, and an
    /// unparsable one is forwarded as cleared.
    pub fn commit_end(&mut self, raw: &str, validator: &dyn DateFieldValidator) {
        let code = validator.validate(raw, &self.constraints(Field::End));
        self.on_validation_error(code);

        let date = parse_field(raw).unwrap_or_else(|err| {
            tracing::debug!(raw, %err, "unparsable end date, clearing it");
            None
        });
        self.on_end_change(date);

        self.log_range_status();
    }

    fn log_range_status(&self) {
        if let Err(err) = self.range_status() {
            tracing::debug!(%err, "selected range is not submittable yet");
        }
    }
}
