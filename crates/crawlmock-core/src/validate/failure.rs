use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One step into a JSON document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a raw payload, rendered as
/// `profiles.creator_profile.category[2].name`.
///
/// The empty path denotes the payload root and renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    fn prepend(&mut self, segment: Segment) {
        self.0.insert(0, segment);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    /// Builds a key-only path, e.g. `["profiles", "creator_profile"]`.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|k| Segment::Key(k.into())).collect())
    }
}

/// The JSON type actually found where a different shape was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// A structural mismatch between a raw payload and the declared schema.
///
/// Every variant carries the path of the offending field. Paths are built
/// bottom-up: the leaf reports an empty path and each enclosing object or
/// array prepends its own segment on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("{path}: expected {expected}, found {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: &'static str,
        actual: JsonKind,
    },

    #[error("{path}: missing required field (expected {expected})")]
    MissingField {
        path: FieldPath,
        expected: &'static str,
    },

    #[error("{path}: unknown field")]
    UnknownField { path: FieldPath },
}

impl ValidationFailure {
    pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            path: FieldPath::root(),
            expected,
            actual: JsonKind::of(found),
        }
    }

    pub(crate) fn missing(name: &str, expected: &'static str) -> Self {
        Self::MissingField {
            path: FieldPath(vec![Segment::Key(name.to_string())]),
            expected,
        }
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownField {
            path: FieldPath(vec![Segment::Key(name.to_string())]),
        }
    }

    #[must_use]
    pub fn path(&self) -> &FieldPath {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingField { path, .. }
            | Self::UnknownField { path } => path,
        }
    }

    /// Shape the schema declares at [`Self::path`].
    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self {
            Self::TypeMismatch { expected, .. } | Self::MissingField { expected, .. } => expected,
            Self::UnknownField { .. } => "no such field",
        }
    }

    /// What the payload held at [`Self::path`]: a JSON kind, `missing`, or
    /// `unknown field`.
    #[must_use]
    pub fn actual(&self) -> String {
        match self {
            Self::TypeMismatch { actual, .. } => actual.to_string(),
            Self::MissingField { .. } => "missing".to_string(),
            Self::UnknownField { .. } => "unknown field".to_string(),
        }
    }

    #[must_use]
    pub(crate) fn within(mut self, segment: Segment) -> Self {
        match &mut self {
            Self::TypeMismatch { path, .. }
            | Self::MissingField { path, .. }
            | Self::UnknownField { path } => path.prepend(segment),
        }
        self
    }
}
