//! [`Validate`] for the leaf types the schema is built from.
//!
//! No coercion happens here: a string never becomes a number, a float never
//! becomes an integer, and a boolean is only ever a JSON boolean.

use serde_json::{Map, Value};

use super::{Segment, Validate, ValidateOptions, ValidationFailure};
use crate::schema::Numeric;

impl Validate for String {
    const EXPECTED: &'static str = "string";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        match raw {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationFailure::mismatch(Self::EXPECTED, other)),
        }
    }
}

impl Validate for i64 {
    const EXPECTED: &'static str = "integer";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        match raw.as_i64() {
            Some(i) => Ok(i),
            // u64 beyond i64::MAX
            None if raw.is_u64() => Err(ValidationFailure::mismatch(
                "integer within signed 64-bit range",
                raw,
            )),
            None => Err(ValidationFailure::mismatch(Self::EXPECTED, raw)),
        }
    }
}

impl Validate for f64 {
    const EXPECTED: &'static str = "number";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        raw.as_f64()
            .ok_or_else(|| ValidationFailure::mismatch(Self::EXPECTED, raw))
    }
}

impl Validate for bool {
    const EXPECTED: &'static str = "boolean";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        raw.as_bool()
            .ok_or_else(|| ValidationFailure::mismatch(Self::EXPECTED, raw))
    }
}

impl Validate for Numeric {
    const EXPECTED: &'static str = "integer or number";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let Value::Number(n) = raw else {
            return Err(ValidationFailure::mismatch(Self::EXPECTED, raw));
        };
        if n.is_f64() {
            return n
                .as_f64()
                .map(Numeric::Float)
                .ok_or_else(|| ValidationFailure::mismatch(Self::EXPECTED, raw));
        }
        // Integers never fall back to a float.
        i64::validate(raw, options).map(Numeric::Integer)
    }
}

/// Opaque structured value; anything goes, `null` included.
impl Validate for Value {
    const EXPECTED: &'static str = "any JSON value";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        Ok(raw.clone())
    }
}

/// Open key/value bag: must be an object, values are not inspected.
impl Validate for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn validate(raw: &Value, _options: ValidateOptions) -> Result<Self, ValidationFailure> {
        match raw {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ValidationFailure::mismatch(Self::EXPECTED, other)),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn validate(raw: &Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        let Value::Array(items) = raw else {
            return Err(ValidationFailure::mismatch(Self::EXPECTED, raw));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::validate(item, options).map_err(|e| e.within(Segment::Index(i))))
            .collect()
    }
}
