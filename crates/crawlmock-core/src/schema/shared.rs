//! Small shapes that recur across the creator profile.

use serde::Serialize;
use serde_json::Value;

use crate::validate::{ObjectReader, Validate, ValidateOptions, ValidationFailure};

/// A number that the upstream API sends either as an integer or a float.
///
/// The representation supplied is kept, so `3` and `3.0` re-encode
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric {
    Integer(i64),
    Float(f64),
}

impl Numeric {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }
}

/// Money or stat value as displayed by the upstream UI, e.g.
/// `{ "value": "1234.5", "format": "₫1.2K", "symbol": "₫" }`.
///
/// Used for GPM, GMV, revenue per buyer and trend GMV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricValue {
    pub format: Option<String>,
    pub symbol: Option<String>,
    pub value: Option<String>,
}

impl Validate for MetricValue {
    const EXPECTED: &'static str = "metric object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let metric = Self {
            format: r.optional("format")?,
            symbol: r.optional("symbol")?,
            value: r.optional("value")?,
        };
        r.finish()?;
        Ok(metric)
    }
}

/// Min/max GPM band for live or video commerce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GpmRange {
    pub maximum: Option<String>,
    pub maximum_format: Option<String>,
    pub minimal: Option<String>,
    pub minimal_format: Option<String>,
    pub symbol: Option<String>,
}

impl Validate for GpmRange {
    const EXPECTED: &'static str = "GPM range object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let range = Self {
            maximum: r.optional("maximum")?,
            maximum_format: r.optional("maximum_format")?,
            minimal: r.optional("minimal")?,
            minimal_format: r.optional("minimal_format")?,
            symbol: r.optional("symbol")?,
        };
        r.finish()?;
        Ok(range)
    }
}

/// Breakdown entry, e.g. follower age bucket `{ "key": "18-24", "value": "0.41" }`.
///
/// Duplicate keys and any ordering are legal within a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Validate for KeyValue {
    const EXPECTED: &'static str = "key/value object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let pair = Self {
            key: r.optional("key")?,
            value: r.optional("value")?,
        };
        r.finish()?;
        Ok(pair)
    }
}

/// Content category tag with its localisation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: Option<String>,
    pub starling_key: Option<String>,
}

impl Validate for Category {
    const EXPECTED: &'static str = "category object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let category = Self {
            name: r.optional("name")?,
            starling_key: r.optional("starling_key")?,
        };
        r.finish()?;
        Ok(category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndustryGroup {
    pub key: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
}

impl Validate for IndustryGroup {
    const EXPECTED: &'static str = "industry group object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let group = Self {
            key: r.optional("key")?,
            name: r.optional("name")?,
            value: r.optional("value")?,
        };
        r.finish()?;
        Ok(group)
    }
}

/// One end of a product's sale price range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalePrice {
    pub currency: Option<String>,
    pub formatted_price: Option<String>,
    pub price: Option<String>,
}

impl Validate for SalePrice {
    const EXPECTED: &'static str = "price object";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let mut r = ObjectReader::new(raw, options)?;
        let price = Self {
            currency: r.optional("currency")?,
            formatted_price: r.optional("formatted_price")?,
            price: r.optional("price")?,
        };
        r.finish()?;
        Ok(price)
    }
}
