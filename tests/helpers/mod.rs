//! Test helpers for driving the router without binding a socket

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rangepick::config::{Config, I18nConfig, ObservabilityConfig, ServerConfig};
use rangepick_range::FixedClock;
use tower::ServiceExt;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        i18n: I18nConfig::default(),
    }
}

/// Router whose clock is frozen on `today`.
pub fn test_app(today: NaiveDate) -> Router {
    rangepick::router(rangepick::AppState::with_clock(
        test_config(),
        FixedClock(today),
    ))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

pub async fn send(app: Router, request: Request<Body>) -> anyhow::Result<TestResponse> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec())?,
    })
}

pub async fn get(app: Router, uri: &str, language: Option<&str>) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder().uri(uri);
    if let Some(language) = language {
        builder = builder.header(header::ACCEPT_LANGUAGE, language);
    }

    send(app, builder.body(Body::empty())?).await
}

pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<TestResponse> {
    post_form_as(app, uri, fields, None).await
}

pub async fn post_form_as(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    language: Option<&str>,
) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(language) = language {
        builder = builder.header(header::ACCEPT_LANGUAGE, language);
    }

    send(app, builder.body(Body::from(serde_urlencoded::to_string(fields)?))?).await
}
