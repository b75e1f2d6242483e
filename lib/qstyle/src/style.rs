//! Parameter serialization styles.

use derive_more::Display;

/// OpenAPI 3.0 parameter serialization style.
///
/// Each style defines how a parameter value is rendered into text. The
/// Display and serde representations use the wire names from the OpenAPI
/// specification (e.g. `spaceDelimited`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    /// Matrix style - semicolon-prefixed path parameters (`;color=blue`).
    #[display("matrix")]
    Matrix,
    /// Label style - dot-prefixed path parameters (`.blue`).
    #[display("label")]
    Label,
    /// Simple style - comma-separated values (`blue,black`).
    #[display("simple")]
    Simple,
    /// Form style - ampersand-joined `name=value` pairs (`color=blue`).
    #[display("form")]
    #[default]
    Form,
    /// Space-delimited style - values joined with an escaped space (`%20`).
    #[display("spaceDelimited")]
    SpaceDelimited,
    /// Pipe-delimited style - values joined with an escaped pipe (`%7C`).
    #[display("pipeDelimited")]
    PipeDelimited,
    /// Deep-object style - bracketed keys (`color%5BR%5D=100`).
    #[display("deepObject")]
    DeepObject,
}

impl Style {
    /// Get the OpenAPI wire name of the style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Label => "label",
            Self::Simple => "simple",
            Self::Form => "form",
            Self::SpaceDelimited => "spaceDelimited",
            Self::PipeDelimited => "pipeDelimited",
            Self::DeepObject => "deepObject",
        }
    }

    /// Returns `true` for the delimited styles (`spaceDelimited` and
    /// `pipeDelimited`), which only apply to non-exploded collections.
    #[must_use]
    pub const fn is_delimited(&self) -> bool {
        matches!(self, Self::SpaceDelimited | Self::PipeDelimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_display() {
        assert_eq!(Style::Matrix.to_string(), "matrix");
        assert_eq!(Style::Label.to_string(), "label");
        assert_eq!(Style::Simple.to_string(), "simple");
        assert_eq!(Style::Form.to_string(), "form");
        assert_eq!(Style::SpaceDelimited.to_string(), "spaceDelimited");
        assert_eq!(Style::PipeDelimited.to_string(), "pipeDelimited");
        assert_eq!(Style::DeepObject.to_string(), "deepObject");
    }

    #[test]
    fn style_as_str_matches_display() {
        for style in [
            Style::Matrix,
            Style::Label,
            Style::Simple,
            Style::Form,
            Style::SpaceDelimited,
            Style::PipeDelimited,
            Style::DeepObject,
        ] {
            assert_eq!(style.as_str(), style.to_string());
        }
    }

    #[test]
    fn style_default_is_form() {
        assert_eq!(Style::default(), Style::Form);
    }

    #[test]
    fn style_is_delimited() {
        assert!(Style::SpaceDelimited.is_delimited());
        assert!(Style::PipeDelimited.is_delimited());
        assert!(!Style::Form.is_delimited());
        assert!(!Style::DeepObject.is_delimited());
    }
}
