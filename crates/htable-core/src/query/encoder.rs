//! Query-string construction for sort links.

use super::params::QueryParams;

/// Turns a parameter map into the part of a URL after `?`.
///
/// Implemented by [`UrlEncoder`] and by any `Fn(&QueryParams) -> String`, so
/// a caller can plug in the URL builder of whatever web stack hosts the table.
pub trait QueryEncoder {
    fn encode(&self, params: &QueryParams) -> String;
}

/// Percent-encodes keys and values and joins them with `&` in map order.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlEncoder;

impl QueryEncoder for UrlEncoder {
    fn encode(&self, params: &QueryParams) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<F> QueryEncoder for F
where
    F: Fn(&QueryParams) -> String,
{
    fn encode(&self, params: &QueryParams) -> String {
        self(params)
    }
}
