//! Per-style serialization of validated parameter entries.
//!
//! Each function renders one fragment for one style. Callers guarantee the
//! style/shape/explode combination passed validation, so the delimited and
//! deep-object serializers only ever see the shapes they are defined over.

use percent_encoding::{AsciiSet, utf8_percent_encode};

use crate::Value;
use crate::params::Param;
use crate::style::Style;

/// The space introduced by the `spaceDelimited` join, escaped as `%20`.
const SPACE: &AsciiSet = &AsciiSet::EMPTY.add(b' ');

/// The pipe introduced by the `pipeDelimited` join, escaped as `%7C`.
const PIPE: &AsciiSet = &AsciiSet::EMPTY.add(b'|');

/// Render one entry to its text fragment.
pub(crate) fn serialize(param: &Param) -> String {
    match param.style {
        Style::Matrix => matrix(&param.name, &param.value, param.explode),
        Style::Label => label(&param.value, param.explode),
        Style::Simple => simple(&param.value, param.explode),
        Style::Form => form(&param.name, &param.value, param.explode),
        Style::SpaceDelimited => space_delimited(&param.name, &param.value),
        Style::PipeDelimited => pipe_delimited(&param.name, &param.value),
        Style::DeepObject => deep_object(&param.name, &param.value),
    }
}

fn matrix(name: &str, value: &Value, explode: bool) -> String {
    match value {
        Value::Absent => format!(";{name}"),
        Value::Scalar(s) => format!(";{name}={s}"),
        Value::Sequence(items) => {
            if explode {
                items.iter().map(|v| format!(";{name}={v}")).collect()
            } else {
                format!(";{name}={}", items.join(","))
            }
        }
        Value::Mapping(pairs) => {
            if explode {
                pairs.iter().map(|(k, v)| format!(";{k}={v}")).collect()
            } else {
                format!(";{name}={}", join_pairs(pairs, ","))
            }
        }
    }
}

fn label(value: &Value, explode: bool) -> String {
    match value {
        Value::Absent => ".".to_string(),
        Value::Scalar(s) => format!(".{s}"),
        Value::Sequence(items) => {
            if explode {
                format!(".{}", items.join("."))
            } else {
                format!(".{}", items.join(","))
            }
        }
        Value::Mapping(pairs) => {
            if explode {
                let joined = pairs
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(".");
                format!(".{joined}")
            } else {
                format!(".{}", join_pairs(pairs, ","))
            }
        }
    }
}

// Explode only matters for mappings here; sequences render identically.
fn simple(value: &Value, explode: bool) -> String {
    match value {
        Value::Absent => String::new(),
        Value::Scalar(s) => s.clone(),
        Value::Sequence(items) => items.join(","),
        Value::Mapping(pairs) => {
            if explode {
                pairs
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(",")
            } else {
                join_pairs(pairs, ",")
            }
        }
    }
}

fn form(name: &str, value: &Value, explode: bool) -> String {
    match value {
        Value::Absent => format!("{name}="),
        Value::Scalar(s) => format!("{name}={s}"),
        Value::Sequence(items) => {
            if items.is_empty() {
                format!("{name}=")
            } else if explode {
                items
                    .iter()
                    .map(|v| format!("{name}={v}"))
                    .collect::<Vec<_>>()
                    .join("&")
            } else {
                format!("{name}={}", items.join(","))
            }
        }
        Value::Mapping(pairs) => {
            if pairs.is_empty() {
                format!("{name}=")
            } else if explode {
                pairs
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join("&")
            } else {
                format!("{name}={}", join_pairs(pairs, ","))
            }
        }
    }
}

fn space_delimited(name: &str, value: &Value) -> String {
    let joined = match value {
        Value::Sequence(items) => items.join(" "),
        Value::Mapping(pairs) => join_pairs(pairs, " "),
        Value::Absent | Value::Scalar(_) => {
            unreachable!("delimited styles reject scalar and absent values at append")
        }
    };
    format!("{name}={}", utf8_percent_encode(&joined, SPACE))
}

fn pipe_delimited(name: &str, value: &Value) -> String {
    let joined = match value {
        Value::Sequence(items) => items.join("|"),
        Value::Mapping(pairs) => join_pairs(pairs, "|"),
        Value::Absent | Value::Scalar(_) => {
            unreachable!("delimited styles reject scalar and absent values at append")
        }
    };
    format!("{name}={}", utf8_percent_encode(&joined, PIPE))
}

fn deep_object(name: &str, value: &Value) -> String {
    let Value::Mapping(pairs) = value else {
        unreachable!("deepObject rejects non-mapping values at append")
    };
    pairs
        .iter()
        .map(|(k, v)| format!("{name}%5B{k}%5D={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Flatten mapping pairs to `k1<sep>v1<sep>k2<sep>v2...`.
fn join_pairs(pairs: &[(String, String)], sep: &str) -> String {
    pairs
        .iter()
        .flat_map(|(k, v)| [k.as_str(), v.as_str()])
        .collect::<Vec<_>>()
        .join(sep)
}
