//! Input and output records of the normalization engine.
//!
//! ```text
//! ArticleIn { title, content, url, source }
//!         ↓ normalize()
//! Outcome   { title, content, url, source, status_code, status_message }
//!         ↓ downstream_payload()   (success only)
//! DownstreamPayload { content, url }
//! ```
//!
//! The status codes are part of the external contract and never change:
//!
//! | Kind | Code |
//! |------|------|
//! | [`StatusKind::Success`] | 200 |
//! | [`StatusKind::UnknownSource`] | 1001 |
//! | [`StatusKind::PreprocessingFailed`] | 1002 |
//! | [`StatusKind::EmptyContent`] | 1003 |
//! | [`StatusKind::InternalError`] | 1004 |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scraped article as handed to the engine.
///
/// Everything except `source` is opaque text. `source` is matched exactly
/// against the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleIn {
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub url: String,
    pub source: String,
}

impl ArticleIn {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Every way a normalization call can end.
///
/// `EmptyContent` and `UnknownSource` are kept apart even though callers of
/// the legacy service saw both as "content is empty or invalid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Success,
    UnknownSource,
    PreprocessingFailed,
    EmptyContent,
    /// The engine could not run at all, e.g. the registry failed to build.
    InternalError,
}

impl StatusKind {
    pub const ALL: [StatusKind; 5] = [
        StatusKind::Success,
        StatusKind::UnknownSource,
        StatusKind::PreprocessingFailed,
        StatusKind::EmptyContent,
        StatusKind::InternalError,
    ];

    /// Numeric code carried in [`Outcome::status_code`].
    pub const fn code(self) -> u16 {
        match self {
            StatusKind::Success => 200,
            StatusKind::UnknownSource => 1001,
            StatusKind::PreprocessingFailed => 1002,
            StatusKind::EmptyContent => 1003,
            StatusKind::InternalError => 1004,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "SUCCESS",
            StatusKind::UnknownSource => "UNKNOWN_SOURCE",
            StatusKind::PreprocessingFailed => "PREPROCESSING_FAILED",
            StatusKind::EmptyContent => "EMPTY_CONTENT",
            StatusKind::InternalError => "INTERNAL_ERROR",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, StatusKind::Success)
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one normalization call.
///
/// On every failure path `content` is the caller's original text and the
/// identifying fields are passed through untouched, so a failed call is safe
/// to retry or display as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    pub title: String,
    pub content: String,
    pub url: String,
    pub source: String,
    pub status_code: u16,
    pub status_message: String,
}

impl Outcome {
    pub(crate) fn from_article(
        article: ArticleIn,
        kind: StatusKind,
        status_message: impl Into<String>,
    ) -> Self {
        let ArticleIn {
            title,
            content,
            url,
            source,
        } = article;
        Self {
            title,
            content,
            url,
            source,
            status_code: kind.code(),
            status_message: status_message.into(),
        }
    }

    /// Status kind for this outcome, `None` if the code is not one we issue.
    pub fn kind(&self) -> Option<StatusKind> {
        StatusKind::from_code(self.status_code)
    }

    pub fn is_success(&self) -> bool {
        self.status_code == StatusKind::Success.code()
    }

    /// The `{content, url}` pair forwarded downstream. Only successful
    /// outcomes produce one.
    pub fn downstream_payload(&self) -> Option<DownstreamPayload> {
        self.is_success().then(|| DownstreamPayload {
            content: self.content.clone(),
            url: self.url.clone(),
        })
    }
}

/// What leaves the engine toward analysis services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownstreamPayload {
    pub content: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_kind() {
        for kind in StatusKind::ALL {
            assert_eq!(StatusKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(StatusKind::from_code(500), None);
    }

    #[test]
    fn codes_match_external_contract() {
        assert_eq!(StatusKind::Success.code(), 200);
        assert_eq!(StatusKind::UnknownSource.code(), 1001);
        assert_eq!(StatusKind::PreprocessingFailed.code(), 1002);
        assert_eq!(StatusKind::EmptyContent.code(), 1003);
        assert_eq!(StatusKind::InternalError.code(), 1004);
    }

    #[test]
    fn downstream_payload_only_on_success() {
        let article = ArticleIn::new("t", "body", "https://example.com/a", "mint");
        let ok = Outcome::from_article(article.clone(), StatusKind::Success, "ok");
        assert_eq!(
            ok.downstream_payload(),
            Some(DownstreamPayload {
                content: "body".into(),
                url: "https://example.com/a".into(),
            })
        );

        let failed = Outcome::from_article(article, StatusKind::UnknownSource, "nope");
        assert_eq!(failed.downstream_payload(), None);
    }

    #[test]
    fn article_title_and_url_default_when_absent() {
        let article: ArticleIn =
            serde_json::from_str(r#"{"content":"x","source":"mint"}"#).expect("valid json");
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
    }

    #[test]
    fn outcome_serializes_contract_field_names() {
        let outcome = Outcome::from_article(
            ArticleIn::new("t", "c", "u", "mint"),
            StatusKind::EmptyContent,
            "Content is empty or invalid",
        );
        let value = serde_json::to_value(&outcome).expect("serializes");
        assert_eq!(value["status_code"], 1003);
        assert_eq!(value["status_message"], "Content is empty or invalid");
        assert_eq!(value["source"], "mint");
    }
}
