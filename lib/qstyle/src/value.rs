//! Parameter values and their structural shapes.

use derive_more::Display;

/// A parameter value, decided once at construction time.
///
/// The four variants match the value shapes the OpenAPI style matrix is
/// defined over. `Mapping` keeps its pairs in insertion order; keys are
/// unique (see [`Value::mapping`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// No value supplied.
    Absent,
    /// A single text value.
    Scalar(String),
    /// An ordered list of text values.
    Sequence(Vec<String>),
    /// An insertion-ordered mapping of unique keys to text values.
    Mapping(Vec<(String, String)>),
}

/// The structural category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Shape {
    /// No value.
    #[display("absent")]
    Absent,
    /// A single text value.
    #[display("scalar")]
    Scalar,
    /// An ordered list.
    #[display("sequence")]
    Sequence,
    /// A keyed mapping.
    #[display("mapping")]
    Mapping,
}

impl Value {
    /// Create a scalar value.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Create a sequence value, preserving item order.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Create a mapping value, preserving key insertion order.
    ///
    /// A repeated key overwrites the previous value but keeps the position
    /// of its first insertion.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in pairs {
            let (key, value) = (key.into(), value.into());
            if let Some(entry) = entries.iter_mut().find(|(k, _)| *k == key) {
                entry.1 = value;
            } else {
                entries.push((key, value));
            }
        }
        Self::Mapping(entries)
    }

    /// The structural shape of this value.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Absent => Shape::Absent,
            Self::Scalar(_) => Shape::Scalar,
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
        }
    }

    /// Returns `true` if no value was supplied.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Self::sequence(items)
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::mapping(pairs)
    }
}

impl From<Vec<(&str, &str)>> for Value {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Self::mapping(pairs)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
