use axum::{extract::FromRequestParts, http::header::ACCEPT_LANGUAGE, http::request::Parts};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

pub const LANGUAGE_COOKIE: &str = "lang";

/// Languages the visitor asked for, most preferred first.
///
/// A `lang` cookie wins over the `Accept-Language` header. Only the primary
/// subtag is kept (`ko-KR` becomes `ko`).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn from_parts(cookie: Option<&str>, accept_language: Option<&str>) -> Self {
        let mut languages = Vec::new();

        if let Some(lang) = cookie.map(primary_subtag).filter(|l| !l.is_empty()) {
            languages.push(lang);
        }

        let mut weighted = accept_language
            .unwrap_or_default()
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = primary_subtag(parts.next()?);
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);

                // q=0 means "not acceptable"
                (quality > 0.0).then_some((tag, quality))
            })
            .collect::<Vec<_>>();

        // Stable sort keeps header order for equal weights
        weighted.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (tag, _) in weighted {
            if !languages.contains(&tag) {
                languages.push(tag);
            }
        }

        Self(languages)
    }

    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }

    /// First preferred language we have translations for.
    pub fn negotiate(&self, available: &[&str]) -> Option<String> {
        self.0
            .iter()
            .find(|lang| available.contains(&lang.as_str()))
            .cloned()
    }
}

fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let accept_language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());

        Ok(Self::from_parts(
            jar.get(LANGUAGE_COOKIE).map(|c| c.value()),
            accept_language,
        ))
    }
}
