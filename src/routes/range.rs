use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use rangepick_range::{Field, NativeDateValidator, RangeSelector, SelectedRange, format_field};
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::Template;

/// Everything the picker partial needs, already localized.
pub struct PickerView {
    pub start: String,
    pub end: String,
    pub min_start: String,
    pub min_end: String,
    pub start_label: String,
    pub end_label: String,
    pub helper_text: String,
    pub error_code: String,
    pub invalid: bool,
}

impl PickerView {
    pub fn from_selector(selector: &RangeSelector<'_>, locale: &str) -> Self {
        Self {
            start: selector.value(Field::Start),
            end: selector.value(Field::End),
            min_start: format_field(Some(selector.minimum_allowed_start())),
            min_end: format_field(Some(selector.minimum_allowed_end())),
            start_label: selector.label(Field::Start, locale),
            end_label: selector.label(Field::End, locale),
            helper_text: selector.error_message(locale),
            error_code: selector.error().to_string(),
            invalid: !selector.is_valid(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/date-range-picker.html")]
pub struct DateRangePickerTemplate {
    pub picker: PickerView,
}

/// Current field values posted by the picker script.
#[derive(Deserialize, Default)]
pub struct RangeInput {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// POST /range/start - Commit the start field and re-render the picker
pub async fn commit_start(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<RangeInput>,
) -> impl IntoResponse {
    let mut committed: Option<Option<NaiveDate>> = None;

    let picker = {
        let mut selector = RangeSelector::new(
            app_state.clock.as_ref(),
            |date| committed = Some(date),
            |_| {},
        )
        .with_range(SelectedRange::from_fields(&input.start, &input.end));

        selector.commit_start(&input.start, &NativeDateValidator);
        PickerView::from_selector(&selector, template.preferred_language())
    };

    if let Some(start) = committed {
        tracing::info!(start = ?start, "lecture form received start date");
    }

    template.render(DateRangePickerTemplate { picker })
}

/// POST /range/end - Commit the end field and re-render the picker
pub async fn commit_end(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<RangeInput>,
) -> impl IntoResponse {
    let mut committed: Option<Option<NaiveDate>> = None;

    let picker = {
        let mut selector = RangeSelector::new(
            app_state.clock.as_ref(),
            |_| {},
            |date| committed = Some(date),
        )
        .with_range(SelectedRange::from_fields(&input.start, &input.end));

        selector.commit_end(&input.end, &NativeDateValidator);
        PickerView::from_selector(&selector, template.preferred_language())
    };

    if let Some(end) = committed {
        tracing::info!(end = ?end, "lecture form received end date");
    }

    template.render(DateRangePickerTemplate { picker })
}
