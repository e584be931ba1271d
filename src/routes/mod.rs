use std::sync::Arc;

use axum::{
    Router,
    middleware::map_response,
    response::IntoResponse,
    routing::{get, post},
};
use rangepick_range::{Clock, SystemClock};
use tower_http::trace::TraceLayer;

use crate::template::{NotFoundTemplate, Template};

mod health;
mod index;
mod lecture;
mod range;

pub use range::{PickerView, RangeInput};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: crate::config::Config, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Arc::new(clock),
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        axum::http::StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/range/start", post(range::commit_start))
        .route("/range/end", post(range::commit_end))
        .route("/lectures", post(lecture::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .layer(map_response(crate::middleware::minify_html_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
