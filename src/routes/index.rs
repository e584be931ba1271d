use axum::{extract::State, response::IntoResponse};
use rangepick_range::RangeSelector;

use crate::routes::{AppState, PickerView};
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub picker: PickerView,
}

/// GET / - Lecture form with the picker at its initial range
pub async fn page(template: Template, State(app_state): State<AppState>) -> impl IntoResponse {
    let selector = RangeSelector::new(app_state.clock.as_ref(), |_| {}, |_| {});
    let picker = PickerView::from_selector(&selector, template.preferred_language());

    template.render(IndexTemplate { picker })
}
