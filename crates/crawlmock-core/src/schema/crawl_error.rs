use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::validate::{
    deserialize_validated, ObjectReader, Validate, ValidateOptions, ValidationFailure,
};

/// Code the crawler sends when a creator id yields no search hit.
pub const CREATOR_NOT_FOUND: &str = "CREATOR_NOT_FOUND";
/// Code the crawler sends when every profile request for a creator failed.
pub const CREATOR_HAS_NO_PROFILES: &str = "CREATOR_HAS_NO_PROFILES";

/// Failure report posted by the crawler to `POST /creators/errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlError {
    /// Free-form context, typically `{ "creator_id": "..." }`.
    pub data: Map<String, Value>,
    pub code: String,
    pub message: String,
}

/// Classification of [`CrawlError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlErrorKind {
    CreatorNotFound,
    CreatorHasNoProfiles,
    /// Any code this service does not know about. Still accepted.
    Other,
}

impl std::fmt::Display for CrawlErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrawlErrorKind::CreatorNotFound => write!(f, "creator_not_found"),
            CrawlErrorKind::CreatorHasNoProfiles => write!(f, "creator_has_no_profiles"),
            CrawlErrorKind::Other => write!(f, "other"),
        }
    }
}

impl CrawlError {
    #[must_use]
    pub fn kind(&self) -> CrawlErrorKind {
        match self.code.as_str() {
            CREATOR_NOT_FOUND => CrawlErrorKind::CreatorNotFound,
            CREATOR_HAS_NO_PROFILES => CrawlErrorKind::CreatorHasNoProfiles,
            _ => CrawlErrorKind::Other,
        }
    }

    /// The `creator_id` from `data`, when the crawler supplied one as a string.
    #[must_use]
    pub fn creator_id(&self) -> Option<&str> {
        self.data.get("creator_id").and_then(Value::as_str)
    }
}

impl Validate for CrawlError {
    const EXPECTED: &'static str = "crawl error object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let error = Self {
            data: r.required("data")?,
            code: r.required("code")?,
            message: r.required("message")?,
        };
        r.finish()?;
        Ok(error)
    }
}

impl<'de> Deserialize<'de> for CrawlError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_validated(deserializer)
    }
}
