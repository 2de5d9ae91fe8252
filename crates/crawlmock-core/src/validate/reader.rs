use serde_json::{Map, Value};

use super::{Segment, UnknownFieldPolicy, Validate, ValidateOptions, ValidationFailure};

/// Field-by-field reader over one JSON object.
///
/// Schema types build themselves by pulling each declared field through the
/// reader, then call [`ObjectReader::finish`] so the unknown-field policy can
/// inspect whatever was not consumed.
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    options: ValidateOptions,
    seen: Vec<&'static str>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(raw: &'a Value, options: ValidateOptions) -> Result<Self, ValidationFailure> {
        match raw {
            Value::Object(fields) => Ok(Self {
                fields,
                options,
                seen: Vec::with_capacity(fields.len()),
            }),
            other => Err(ValidationFailure::mismatch("object", other)),
        }
    }

    /// Field that may be absent or `null`; both resolve to `None`.
    pub(crate) fn optional<T: Validate>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, ValidationFailure> {
        self.seen.push(name);
        match self.fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.descend(name, value).map(Some),
        }
    }

    /// Field whose key must be present but whose value may be `null`.
    pub(crate) fn nullable<T: Validate>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, ValidationFailure> {
        self.seen.push(name);
        match self.fields.get(name) {
            None => Err(ValidationFailure::missing(name, T::EXPECTED)),
            Some(Value::Null) => Ok(None),
            Some(value) => self.descend(name, value).map(Some),
        }
    }

    /// Field that must be present and non-null.
    pub(crate) fn required<T: Validate>(&mut self, name: &'static str) -> Result<T, ValidationFailure> {
        self.seen.push(name);
        match self.fields.get(name) {
            None => Err(ValidationFailure::missing(name, T::EXPECTED)),
            Some(value) => self.descend(name, value),
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationFailure> {
        if self.options.unknown_fields == UnknownFieldPolicy::Ignore {
            return Ok(());
        }
        match self
            .fields
            .keys()
            .find(|key| !self.seen.contains(&key.as_str()))
        {
            Some(key) => Err(ValidationFailure::unknown(key)),
            None => Ok(()),
        }
    }

    fn descend<T: Validate>(&self, name: &str, value: &Value) -> Result<T, ValidationFailure> {
        T::validate(value, self.options).map_err(|e| e.within(Segment::Key(name.to_string())))
    }
}
