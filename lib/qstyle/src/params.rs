//! Query parameter collection and rendering.
//!
//! Use [`QueryParams`] to accumulate styled parameters and render them into a
//! query-string-compatible text.
//!
//! # Example
//!
//! ```
//! use qstyle::{QueryParams, Style, Value};
//!
//! let mut params = QueryParams::new();
//! params.push("color", "blue");
//! params.push("size", "large");
//! assert_eq!(params.render(), "color=blue&size=large");
//! ```

use crate::error::{Error, Result};
use crate::ser;
use crate::style::Style;
use crate::value::{Shape, Value};

/// One validated parameter entry.
#[derive(Debug, Clone)]
pub(crate) struct Param {
    pub(crate) name: String,
    pub(crate) value: Value,
    pub(crate) style: Style,
    pub(crate) explode: bool,
}

/// An ordered collection of styled query parameters.
///
/// Entries are appended one at a time, validated on entry, and rendered with
/// [`QueryParams::render`]. Repeated names are legal and serialized
/// independently.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: Vec<Param>,
}

impl QueryParams {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Appends a parameter with an explicit style and explode flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStyleCombination`] when the OpenAPI matrix
    /// leaves the style/shape/explode combination undefined; the collection
    /// is left unchanged.
    pub fn append(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        style: Style,
        explode: bool,
    ) -> Result<()> {
        let name = name.into();
        let value = value.into();
        if let Err(err) = validate(style, value.shape(), explode) {
            tracing::debug!(name = %name, %err, "rejected query parameter");
            return Err(err);
        }
        self.params.push(Param {
            name,
            value,
            style,
            explode,
        });
        Ok(())
    }

    /// Appends a parameter with the defaults (`form` style, `explode=true`),
    /// which accept every value shape.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.push(Param {
            name: name.into(),
            value: value.into(),
            style: Style::Form,
            explode: true,
        });
    }

    /// First value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    /// Every value stored under `name`, in append order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&Value> {
        self.params
            .iter()
            .filter(|p| p.name == name)
            .map(|p| &p.value)
            .collect()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if no entries have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in append order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter().map(|p| (p.name.as_str(), &p.value))
    }

    /// Renders the collection into query-string-compatible text.
    ///
    /// Fragments keep append order. When every entry uses the `form` style
    /// they are joined with `&`; a single non-form entry anywhere switches
    /// the whole output to direct concatenation, since non-form fragments
    /// carry their own leading delimiter.
    #[must_use]
    pub fn render(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        tracing::trace!(params = self.params.len(), "rendering query parameters");

        let fragments: Vec<String> = self.params.iter().map(ser::serialize).collect();
        let all_form = self.params.iter().all(|p| p.style == Style::Form);
        if all_form {
            fragments.join("&")
        } else {
            fragments.concat()
        }
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Reject the style/shape/explode combinations the OpenAPI matrix leaves
/// undefined. An absent value counts as a non-collection shape for the
/// delimited styles.
fn validate(style: Style, shape: Shape, explode: bool) -> Result<()> {
    match style {
        Style::SpaceDelimited | Style::PipeDelimited => {
            if matches!(shape, Shape::Scalar | Shape::Absent) {
                return Err(Error::invalid_style(
                    style,
                    shape,
                    explode,
                    "only applies to sequences and mappings",
                ));
            }
            if explode {
                return Err(Error::invalid_style(
                    style,
                    shape,
                    explode,
                    "defined only for explode=false",
                ));
            }
            Ok(())
        }
        Style::DeepObject => {
            if shape != Shape::Mapping {
                return Err(Error::invalid_style(
                    style,
                    shape,
                    explode,
                    "only applies to mappings",
                ));
            }
            if !explode {
                return Err(Error::invalid_style(
                    style,
                    shape,
                    explode,
                    "requires explode=true",
                ));
            }
            Ok(())
        }
        Style::Matrix | Style::Label | Style::Simple | Style::Form => Ok(()),
    }
}
