use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use rangepick_range::{LectureInput, SelectedRange, submit_lecture};
use serde::Deserialize;

use crate::routes::AppState;
use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "partials/lecture-saved.html")]
pub struct LectureSavedTemplate {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub title: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// POST /lectures - Submit the lecture form
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let lecture = crate::try_response!(
        sync: submit_lecture(
            LectureInput {
                title: input.title,
                range: SelectedRange::from_fields(&input.start, &input.end),
            },
            app_state.clock.today(),
            template.preferred_language(),
        ),
        template
    );

    template
        .render(LectureSavedTemplate {
            title: lecture.title,
            start: lecture.start,
            end: lecture.end,
        })
        .into_response()
}
