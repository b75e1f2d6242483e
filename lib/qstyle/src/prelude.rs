//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy glob
//! importing:
//!
//! ```
//! use qstyle::prelude::*;
//!
//! let mut params = QueryParams::new();
//! params.push("color", "blue");
//! assert_eq!(params.render(), "color=blue");
//! ```

pub use crate::{Error, QueryParams, Result, Shape, Style, Value};
