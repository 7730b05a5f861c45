//! Table state: columns, rows and sort settings.

use super::column::{Column, Handler};
use super::record::{Record, Row};
use super::sort::SortOrder;
use crate::error::TableError;
use crate::query::{QueryEncoder, QueryParams, UrlEncoder};
use indexmap::IndexMap;
use log::debug;
use std::fmt;

pub const DEFAULT_SORT_FIELD_NAME: &str = "sort";
pub const DEFAULT_SORT_ORDER_NAME: &str = "order";

/// A sortable table over rows of type `R`.
///
/// Sort state is read from the parameter snapshot once, when the table is
/// built. The requested sort field is kept as given and checked against the
/// columns on every [`Table::sort_field`] call, so a column added later can
/// still become the active sort field.
pub struct Table<R = Row> {
    pub(super) columns: IndexMap<String, Column<R>>,
    pub(super) rows: Vec<R>,
    pub(super) sort_field: Option<String>,
    pub(super) sort_order: SortOrder,
    pub(super) sort_field_name: String,
    pub(super) sort_order_name: String,
    pub(super) empty_text: String,
    pub(super) escape: bool,
    pub(super) params: QueryParams,
    pub(super) encoder: Box<dyn QueryEncoder>,
}

impl<R> Table<R> {
    /// Table with default parameter names reading sort state from `params`.
    pub fn new(params: QueryParams) -> Self {
        Self::builder().params(params).build()
    }

    pub fn builder() -> TableBuilder<R> {
        TableBuilder::new()
    }

    /// Store a prebuilt column. An existing column with the same id is
    /// replaced in place, keeping its position.
    pub fn insert_column(&mut self, column: Column<R>) {
        let id = column.id().to_string();
        if self.columns.insert(id.clone(), column).is_some() {
            debug!("Replaced column '{}'", id);
        }
    }

    pub fn add_row(&mut self, row: R) {
        self.rows.push(row);
    }

    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = R>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Columns in rendering order.
    pub fn columns(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.values()
    }

    pub fn has_column(&self, id: &str) -> bool {
        self.columns.contains_key(id)
    }

    pub fn column(&self, id: &str) -> Result<&Column<R>, TableError> {
        self.columns
            .get(id)
            .ok_or_else(|| TableError::ColumnNotFound { id: id.to_string() })
    }

    /// Total number of cells per row across all columns.
    pub fn cell_count(&self) -> usize {
        self.columns.values().map(Column::cell_count).sum()
    }

    /// The active sort field: the requested id, if it names an existing
    /// sortable column right now.
    pub fn sort_field(&self) -> Option<&str> {
        let requested = self.sort_field.as_deref()?;
        match self.columns.get(requested) {
            Some(column) if column.is_sortable() => Some(requested),
            _ => None,
        }
    }

    /// The sort field as requested, valid or not.
    pub fn requested_sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    pub fn set_sort_field(&mut self, sort_field: Option<impl Into<String>>) {
        self.sort_field = sort_field.map(Into::into);
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    pub fn sort_field_name(&self) -> &str {
        &self.sort_field_name
    }

    /// Rename the sort field parameter used by links. Sort state already read
    /// at construction is not re-read.
    pub fn set_sort_field_name(&mut self, name: impl Into<String>) {
        self.sort_field_name = name.into();
    }

    pub fn sort_order_name(&self) -> &str {
        &self.sort_order_name
    }

    pub fn set_sort_order_name(&mut self, name: impl Into<String>) {
        self.sort_order_name = name.into();
    }

    pub fn empty_text(&self) -> &str {
        &self.empty_text
    }

    pub fn set_empty_text(&mut self, empty_text: impl Into<String>) {
        self.empty_text = empty_text.into();
    }

    /// Whether labels, text cells and the empty text are HTML-escaped.
    pub fn escapes(&self) -> bool {
        self.escape
    }

    pub fn set_escape(&mut self, escape: bool) {
        self.escape = escape;
    }

    /// The parameter snapshot the table was built from.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

impl<R: Record + 'static> Table<R> {
    /// Declare a column. Re-using an id replaces the earlier column; the last
    /// declaration wins.
    pub fn add_column(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        handler: Handler<R>,
        sortable: bool,
    ) {
        self.insert_column(Column::new(id, label, handler, sortable));
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns.values().collect::<Vec<_>>())
            .field("rows", &self.rows.len())
            .field("sort_field", &self.sort_field)
            .field("sort_order", &self.sort_order)
            .field("sort_field_name", &self.sort_field_name)
            .field("sort_order_name", &self.sort_order_name)
            .field("empty_text", &self.empty_text)
            .field("escape", &self.escape)
            .finish()
    }
}

/// Collects everything a [`Table`] needs before sort state is resolved.
pub struct TableBuilder<R> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    sort_field_name: String,
    sort_order_name: String,
    empty_text: String,
    escape: bool,
    params: QueryParams,
    encoder: Box<dyn QueryEncoder>,
}

impl<R> Default for TableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> TableBuilder<R> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            sort_field_name: DEFAULT_SORT_FIELD_NAME.to_string(),
            sort_order_name: DEFAULT_SORT_ORDER_NAME.to_string(),
            empty_text: String::new(),
            escape: true,
            params: QueryParams::new(),
            encoder: Box::new(UrlEncoder),
        }
    }

    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    pub fn row(mut self, row: R) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn sort_field_name(mut self, name: impl Into<String>) -> Self {
        self.sort_field_name = name.into();
        self
    }

    pub fn sort_order_name(mut self, name: impl Into<String>) -> Self {
        self.sort_order_name = name.into();
        self
    }

    pub fn empty_text(mut self, empty_text: impl Into<String>) -> Self {
        self.empty_text = empty_text.into();
        self
    }

    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Snapshot of the incoming query parameters.
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    pub fn encoder(mut self, encoder: impl QueryEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    pub fn build(self) -> Table<R> {
        let sort_field = self.params.get(&self.sort_field_name).map(str::to_string);
        let sort_order = SortOrder::from_param(self.params.get(&self.sort_order_name));
        debug!(
            "Resolved sort state: {}={:?}, {}={}",
            self.sort_field_name, sort_field, self.sort_order_name, sort_order
        );

        let mut table = Table {
            columns: IndexMap::with_capacity(self.columns.len()),
            rows: self.rows,
            sort_field,
            sort_order,
            sort_field_name: self.sort_field_name,
            sort_order_name: self.sort_order_name,
            empty_text: self.empty_text,
            escape: self.escape,
            params: self.params,
            encoder: self.encoder,
        };
        for column in self.columns {
            table.insert_column(column);
        }

        if let Some(requested) = table.requested_sort_field() {
            if table.sort_field().is_none() {
                debug!("Ignoring sort field '{}': no sortable column", requested);
            }
        }

        table
    }
}
