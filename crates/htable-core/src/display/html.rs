//! Minimal HTML assembly helpers.
//!
//! Markup is built by direct string concatenation. Everything that comes from
//! user data goes through [`escape`] first; [`Tag`] takes care of attribute
//! values so callers only decide whether element content is trusted.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Returns the input borrowed when
/// nothing needs escaping.
///
/// # Examples
/// ```
/// use htable_core::display::html::escape;
/// assert_eq!(escape("a < b"), "a &lt; b");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    if s.contains(['&', '<', '>', '"', '\'']) {
        let mut escaped = String::with_capacity(s.len() + 8);
        for c in s.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#x27;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

/// An element under construction: name plus ordered attributes.
#[derive(Debug, Clone)]
pub struct Tag {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    /// Add an attribute. The value is escaped when the tag is rendered.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Add an attribute only when `value` is `Some`.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn open(&self) -> String {
        let mut out = String::with_capacity(16 + self.attrs.len() * 16);
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');
        out
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Wrap already-rendered content. `inner` is emitted verbatim.
    pub fn wrap(&self, inner: &str) -> String {
        let mut out = self.open();
        out.push_str(inner);
        out.push_str(&self.close());
        out
    }
}
