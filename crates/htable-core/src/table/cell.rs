use crate::display::html::escape;
use std::borrow::Cow;
use std::fmt;

/// A single rendered value inside a `<td>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text, escaped on output unless the table disables escaping.
    Text(String),
    /// Trusted markup, always emitted verbatim.
    Markup(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn markup(value: impl Into<String>) -> Self {
        Cell::Markup(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Markup(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Content ready to be placed between tags.
    pub fn to_html(&self, escape_text: bool) -> Cow<'_, str> {
        match self {
            Cell::Text(s) if escape_text => escape(s),
            Cell::Text(s) | Cell::Markup(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Text(String::new())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        Cell::Text(value.unwrap_or_default())
    }
}

impl From<&serde_json::Value> for Cell {
    fn from(value: &serde_json::Value) -> Self {
        Cell::Text(super::record::value_to_text(value))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
