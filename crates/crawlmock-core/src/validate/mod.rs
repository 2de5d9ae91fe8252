//! Shape-directed validation of raw JSON payloads against the creator schema.
//!
//! Validation is structural only. A payload is accepted when every declared
//! field is either absent, `null`, or of the declared JSON type; values are
//! never range-checked or cross-checked against each other.

mod failure;
mod primitives;
mod reader;

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub use failure::{FieldPath, JsonKind, Segment, ValidationFailure};
pub(crate) use reader::ObjectReader;

use crate::schema::{CrawlError, CreatorResult};

/// What to do with object keys the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Skip them. The upstream API adds fields over time and the crawler
    /// forwards whatever it sees.
    #[default]
    Ignore,
    /// Fail the record at the first undeclared key.
    Reject,
}

impl FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected \"ignore\" or \"reject\", got \"{other}\"")),
        }
    }
}

impl std::fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub unknown_fields: UnknownFieldPolicy,
}

/// A type that can be built from a raw JSON value by walking its declared shape.
pub trait Validate: Sized {
    /// Human-readable shape reported in failures, e.g. `"string"`.
    const EXPECTED: &'static str;

    /// # Errors
    ///
    /// Returns [`ValidationFailure`] describing the first structural mismatch,
    /// with a path relative to `raw`.
    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure>;
}

/// Validate one raw creator result payload.
///
/// # Errors
///
/// Returns [`ValidationFailure`] if the payload does not match the schema.
pub fn validate_creator_result(
    raw: &Value,
    options: ValidateOptions,
) -> Result<CreatorResult, ValidationFailure> {
    CreatorResult::validate(raw, options)
}

/// Validate one raw crawl error report.
///
/// # Errors
///
/// Returns [`ValidationFailure`] if `code`/`message` are not strings or `data`
/// is not an object.
pub fn validate_crawl_error(
    raw: &Value,
    options: ValidateOptions,
) -> Result<CrawlError, ValidationFailure> {
    CrawlError::validate(raw, options)
}

/// Serde entry point for validated types.
///
/// Buffers the input as a [`Value`] and runs [`Validate`] with default
/// options, so `serde_json::from_str` accepts exactly what the HTTP
/// endpoints accept.
pub(crate) fn deserialize_validated<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Validate,
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    T::validate(&raw, ValidateOptions::default()).map_err(serde::de::Error::custom)
}

/// Outcome for one element of a submitted batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<T> {
    /// Zero-based position of the element in the submitted batch.
    pub index: usize,
    pub result: Result<T, ValidationFailure>,
}

/// Apply `validator` to every element independently, preserving input order.
///
/// A failing element never short-circuits the rest of the batch.
pub fn validate_batch<T, F>(raws: &[Value], validator: F) -> Vec<BatchOutcome<T>>
where
    F: Fn(&Value) -> Result<T, ValidationFailure>,
{
    raws.iter()
        .enumerate()
        .map(|(index, raw)| BatchOutcome {
            index,
            result: validator(raw),
        })
        .collect()
}

#[cfg(test)]
#[path = "../validate_test.rs"]
mod tests;
