//! Error types for qstyle.

use derive_more::{Display, Error};

use crate::{Shape, Style};

/// Main error type for qstyle operations.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A style/shape/explode combination the OpenAPI matrix leaves undefined.
    #[display("{style} style is not applicable to {shape} values with explode={explode}: {reason}")]
    InvalidStyleCombination {
        /// The requested serialization style.
        style: Style,
        /// The structural shape of the rejected value.
        shape: Shape,
        /// The requested explode flag.
        explode: bool,
        /// Why the combination is undefined.
        #[error(not(source))]
        reason: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid-style-combination error.
    #[must_use]
    pub fn invalid_style(
        style: Style,
        shape: Shape,
        explode: bool,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidStyleCombination {
            style,
            shape,
            explode,
            reason: reason.into(),
        }
    }

    /// The style of the rejected combination.
    #[must_use]
    pub const fn style(&self) -> Style {
        match self {
            Self::InvalidStyleCombination { style, .. } => *style,
        }
    }

    /// The value shape of the rejected combination.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::InvalidStyleCombination { shape, .. } => *shape,
        }
    }

    /// The explode flag of the rejected combination.
    #[must_use]
    pub const fn explode(&self) -> bool {
        match self {
            Self::InvalidStyleCombination { explode, .. } => *explode,
        }
    }
}
