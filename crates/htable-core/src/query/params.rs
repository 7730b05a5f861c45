//! Snapshot of the incoming query parameters.

use crate::error::CliError;
use indexmap::IndexMap;

/// Ordered, immutable-by-convention view of the request's query parameters.
///
/// A table reads its sort state from this snapshot once, and sort links are
/// built from a copy of it, so every unrelated parameter (page, filters, ...)
/// survives a click on a header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string such as `sort=name&order=desc`.
    ///
    /// A leading `?` is ignored, `+` decodes to a space, and a key without `=`
    /// gets an empty value. When a key repeats, the last value wins.
    ///
    /// # Examples
    /// ```
    /// use htable_core::query::QueryParams;
    /// let params = QueryParams::from_query_string("?sort=name&q=two+words");
    /// assert_eq!(params.get("sort"), Some("name"));
    /// assert_eq!(params.get("q"), Some("two words"));
    /// ```
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| !key.is_empty())
            .collect()
    }

    /// Parse `key=value` arguments as given on the command line.
    pub fn from_key_value_args<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut params = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    params.insert(key, value);
                }
                _ => {
                    return Err(CliError::InvalidArguments(format!(
                        "Invalid parameter format '{}'. Expected 'key=value'",
                        arg
                    )));
                }
            }
        }
        Ok(params)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Set a parameter. An existing key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    /// Copy of this snapshot with one parameter overridden.
    pub fn with(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = self.clone();
        params.insert(name, value);
        params
    }

    /// Merge `other` into this snapshot; its values win.
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
