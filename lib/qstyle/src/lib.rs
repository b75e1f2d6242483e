//! OpenAPI 3.0 parameter style serialization.
//!
//! This crate renders named parameter values into query-string-compatible
//! text following the OpenAPI 3.0 `style`/`explode` matrix:
//! - [`Style`] - the seven serialization styles
//! - [`Value`] - the four value shapes (absent, scalar, sequence, mapping)
//! - [`QueryParams`] - the ordered parameter collection and renderer
//! - [`Error`] and [`Result`] - Error handling
//!
//! Combinations the matrix leaves undefined are rejected when appended, so a
//! collection only ever holds renderable entries.
//!
//! # Example
//!
//! ```
//! use qstyle::{QueryParams, Style, Value};
//!
//! let mut params = QueryParams::new();
//! params.append(
//!     "color",
//!     Value::sequence(["blue", "black", "brown"]),
//!     Style::PipeDelimited,
//!     false,
//! )?;
//! assert_eq!(params.render(), "color=blue%7Cblack%7Cbrown");
//! # Ok::<(), qstyle::Error>(())
//! ```
//!
//! Values pass through verbatim apart from the delimiter escapes the
//! delimited and deep-object styles require; general percent-encoding of
//! reserved URL characters is left to the embedding layer.

mod error;
mod params;
pub mod prelude;
mod ser;
mod style;
mod value;

pub use error::{Error, Result};
pub use params::QueryParams;
pub use style::Style;
pub use value::{Shape, Value};

// Re-export for callers composing their own escape sets
pub use percent_encoding;
