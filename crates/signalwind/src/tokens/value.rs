//! Token values.

use serde::{Deserialize, Serialize};

/// The value of a single design token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A literal CSS value: a hex color, a length, a timing function...
    Literal(String),
    /// An ordered font stack, e.g. `["Inter", "ui-sans-serif", "system-ui"]`.
    FontStack(Vec<String>),
}

impl TokenValue {
    /// Renders the value as it appears in a CSS declaration.
    ///
    /// Font family names containing whitespace are double-quoted.
    ///
    /// ```rust
    /// use signalwind::TokenValue;
    ///
    /// let stack = TokenValue::FontStack(vec!["JetBrains Mono".into(), "monospace".into()]);
    /// assert_eq!(stack.to_css(), r#""JetBrains Mono", monospace"#);
    /// ```
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Literal(value) => value.clone(),
            TokenValue::FontStack(families) => families
                .iter()
                .map(|family| {
                    let already_quoted = family.starts_with('"') || family.starts_with('\'');
                    if family.contains(char::is_whitespace) && !already_quoted {
                        format!("\"{}\"", family)
                    } else {
                        family.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Returns the literal string, if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            TokenValue::Literal(value) => Some(value),
            TokenValue::FontStack(_) => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Literal(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Literal(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(families: Vec<String>) -> Self {
        TokenValue::FontStack(families)
    }
}

impl From<&[&str]> for TokenValue {
    fn from(families: &[&str]) -> Self {
        TokenValue::FontStack(families.iter().map(|f| f.to_string()).collect())
    }
}
