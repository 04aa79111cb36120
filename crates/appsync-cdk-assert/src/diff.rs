//! Structural comparison of JSON documents.
//!
//! Paths are reported as JSON pointers (`/Resources/Api/Type`).

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// How strictly the actual template must match the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStyle {
    /// Both documents must be structurally equal. Extra or missing keys fail.
    #[default]
    Exact,
    /// Every key of the expected document must be present with a matching
    /// value. Extra object keys in the actual document are allowed.
    Superset,
}

impl fmt::Display for MatchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Superset => write!(f, "superset"),
        }
    }
}

/// What differs at one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceKind {
    /// The expected document has a key the actual one lacks.
    Missing {
        /// Value that was expected.
        expected: Value,
    },
    /// The actual document has a key the expected one lacks.
    Unexpected {
        /// Value that was found.
        actual: Value,
    },
    /// Both documents have the path but disagree on its value.
    Changed {
        /// Value that was expected.
        expected: Value,
        /// Value that was found.
        actual: Value,
    },
}

/// A single structural difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    /// JSON pointer to the differing value; empty for the root.
    pub path: String,
    /// The kind of difference.
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        match &self.kind {
            DifferenceKind::Missing { expected } => {
                write!(f, "- {path}: missing, expected {expected}")
            }
            DifferenceKind::Unexpected { actual } => {
                write!(f, "+ {path}: unexpected {actual}")
            }
            DifferenceKind::Changed { expected, actual } => {
                write!(f, "~ {path}: expected {expected}, got {actual}")
            }
        }
    }
}

/// A failed template match.
#[derive(Debug, Error)]
#[error(
    "template does not match ({style}), {} difference(s):\n{}",
    .differences.len(),
    render(.differences)
)]
pub struct Mismatch {
    /// Style the comparison used.
    pub style: MatchStyle,
    /// Every difference found, in document order.
    pub differences: Vec<Difference>,
}

fn render(differences: &[Difference]) -> String {
    differences
        .iter()
        .map(|d| format!("  {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compares `actual` against `expected` and returns every difference.
#[must_use]
pub fn compare(expected: &Value, actual: &Value, style: MatchStyle) -> Vec<Difference> {
    let mut out = Vec::new();
    walk(String::new(), expected, actual, style, &mut out);
    out
}

fn walk(path: String, expected: &Value, actual: &Value, style: MatchStyle, out: &mut Vec<Difference>) {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => {
            for (key, exp_value) in exp {
                let child = child_path(&path, key);
                match act.get(key) {
                    Some(act_value) => walk(child, exp_value, act_value, style, out),
                    None => out.push(Difference {
                        path: child,
                        kind: DifferenceKind::Missing {
                            expected: exp_value.clone(),
                        },
                    }),
                }
            }
            if style == MatchStyle::Exact {
                for (key, act_value) in act.iter().filter(|(k, _)| !exp.contains_key(*k)) {
                    out.push(Difference {
                        path: child_path(&path, key),
                        kind: DifferenceKind::Unexpected {
                            actual: act_value.clone(),
                        },
                    });
                }
            }
        }
        (Value::Array(exp), Value::Array(act)) if exp.len() == act.len() => {
            for (idx, (e, a)) in exp.iter().zip(act).enumerate() {
                walk(child_path(&path, &idx.to_string()), e, a, style, out);
            }
        }
        _ if expected == actual => {}
        _ => out.push(Difference {
            path,
            kind: DifferenceKind::Changed {
                expected: expected.clone(),
                actual: actual.clone(),
            },
        }),
    }
}

fn child_path(parent: &str, segment: &str) -> String {
    format!("{parent}/{}", segment.replace('~', "~0").replace('/', "~1"))
}
