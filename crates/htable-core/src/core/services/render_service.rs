//! Render service: layout + rows + request parameters into HTML

use super::types::RenderParams;
use crate::AppError;
use crate::query::QueryParams;
use crate::storage::config::Config;
use crate::storage::layout::Layout;
use crate::table::{Row, Table};
use crate::utils::data::load_rows;
use log::debug;

pub struct RenderService {
    config: Config,
}

impl RenderService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parameter snapshot from a raw query string plus `key=value` overrides.
    pub fn build_params(query: Option<&str>, params: &[String]) -> Result<QueryParams, AppError> {
        let mut snapshot = query.map(QueryParams::from_query_string).unwrap_or_default();
        snapshot.merge(&QueryParams::from_key_value_args(params)?);
        Ok(snapshot)
    }

    /// Build a table using the configured parameter names, empty text and
    /// escaping.
    pub fn build_table(
        &self,
        layout: &Layout,
        rows: Vec<Row>,
        params: QueryParams,
        empty_text: Option<String>,
    ) -> Table<Row> {
        let empty_text = empty_text.unwrap_or_else(|| self.config.get_empty_text());
        Table::builder()
            .sort_field_name(self.config.get_sort_field_name())
            .sort_order_name(self.config.get_sort_order_name())
            .escape(self.config.get_escape())
            .empty_text(empty_text)
            .columns(layout.to_columns())
            .rows(rows)
            .params(params)
            .build()
    }

    /// Load every input named by `request` and render the table.
    pub fn render(&self, request: &RenderParams) -> Result<String, AppError> {
        let layout = Layout::load(&request.layout)?;
        let rows = load_rows(&request.rows)?;
        let params = Self::build_params(request.query.as_deref(), &request.params)?;
        debug!(
            "Rendering {} columns, {} rows, {} parameters",
            layout.columns.len(),
            rows.len(),
            params.len()
        );

        let table = self.build_table(&layout, rows, params, request.empty_text.clone());
        Ok(table.render())
    }
}
