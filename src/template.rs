use axum::{
    RequestPartsExt,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::language::UserLanguage;

pub const SERVER_ERROR_MESSAGE: &str = "server_error";

pub(crate) mod filters {
    use chrono::{Datelike, NaiveDate};

    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")?;

        Ok(rust_i18n::t!(value, locale = preferred_language.as_str()).to_string())
    }

    #[askama::filter_fn]
    pub fn date(date: &NaiveDate, values: &dyn askama::Values) -> askama::Result<String> {
        let preferred_language = askama::get_value::<String>(values, "preferred_language")?;

        Ok(rust_i18n::t!(
            "date_format",
            locale = preferred_language.as_str(),
            year = date.year(),
            month = date.month(),
            day = date.day()
        )
        .to_string())
    }
}

pub struct Template {
    preferred_language: String,
}

impl Template {
    pub fn new(preferred_language: impl Into<String>) -> Self {
        Self {
            preferred_language: preferred_language.into(),
        }
    }

    pub fn preferred_language(&self) -> &str {
        &self.preferred_language
    }

    pub fn t(&self, key: &str) -> String {
        rust_i18n::t!(key, locale = self.preferred_language.as_str()).to_string()
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert(
            "preferred_language",
            Box::new(self.preferred_language.to_owned()),
        );

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_language = parts.extract::<UserLanguage>().await?;

        let preferred_language = user_language
            .negotiate(&rust_i18n::available_locales!())
            .unwrap_or_else(|| state.config.i18n.default_locale.to_owned());

        Ok(Template::new(preferred_language))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

/// Unwraps a `rangepick_shared::Result`, or returns an error toast from the handler.
#[macro_export]
macro_rules! try_response {
    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) if err.is_user_facing() => {
                return (
                    axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                    $template.render($crate::template::ToastErrorTemplate {
                        message: &err.to_string(),
                        description: None,
                    }),
                )
                    .into_response();
            }
            Err(err) => {
                tracing::error!("{err}");

                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $template.render($crate::template::ToastErrorTemplate {
                        message: &$template.t($crate::template::SERVER_ERROR_MESSAGE),
                        description: None,
                    }),
                )
                    .into_response();
            }
        }
    };
}
