use std::path::PathBuf;

/// Inputs of a render request
#[derive(Debug, Clone, Default)]
pub struct RenderParams {
    /// TOML file declaring the columns
    pub layout: PathBuf,
    /// JSON rows file, `-` for stdin
    pub rows: PathBuf,
    /// Raw query string of the incoming request
    pub query: Option<String>,
    /// Additional `key=value` parameters, applied after `query`
    pub params: Vec<String>,
    /// Overrides the configured empty text
    pub empty_text: Option<String>,
}

/// Changes requested by `config set`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub sort_field_name: Option<String>,
    pub sort_order_name: Option<String>,
    pub empty_text: Option<String>,
    pub escape: Option<bool>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
