//! Table columns and their cell extractors.

use super::cell::Cell;
use super::record::Record;
use std::fmt;

/// A function producing one cell from a row.
pub type Extractor<R> = Box<dyn Fn(&R) -> Cell>;

/// Box a closure as an [`Extractor`], converting its output into a [`Cell`].
///
/// # Examples
/// ```
/// use htable_core::table::{Row, extractor, Cell};
/// let upper = extractor(|row: &Row| {
///     row.get("name").and_then(|v| v.as_str()).unwrap_or("").to_uppercase()
/// });
/// let row: Row = serde_json::from_str(r#"{"name": "ada"}"#).unwrap();
/// assert_eq!(upper(&row), Cell::text("ADA"));
/// ```
pub fn extractor<R, F, C>(f: F) -> Extractor<R>
where
    R: 'static,
    F: Fn(&R) -> C + 'static,
    C: Into<Cell> + 'static,
{
    Box::new(move |row: &R| f(row).into())
}

/// Extractor reading a named field, empty when the row lacks it.
pub fn field_extractor<R>(name: impl Into<String>) -> Extractor<R>
where
    R: Record + 'static,
{
    let name = name.into();
    Box::new(move |row: &R| Cell::Text(row.field(&name).unwrap_or_default()))
}

/// How a column turns a row into cells.
pub enum Handler<R> {
    /// Read the field named after the column id.
    Field,
    /// One custom extractor.
    One(Extractor<R>),
    /// Several extractors; the column spans one cell per extractor.
    Many(Vec<Extractor<R>>),
}

impl<R: 'static> Handler<R> {
    pub fn field() -> Self {
        Handler::Field
    }

    pub fn one<F, C>(f: F) -> Self
    where
        F: Fn(&R) -> C + 'static,
        C: Into<Cell> + 'static,
    {
        Handler::One(extractor(f))
    }

    pub fn many(extractors: Vec<Extractor<R>>) -> Self {
        Handler::Many(extractors)
    }

    /// One field extractor per name, e.g. first and last name under one header.
    pub fn fields<I, S>(names: I) -> Self
    where
        R: Record,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Handler::Many(names.into_iter().map(|name| field_extractor(name)).collect())
    }
}

impl<R> Default for Handler<R> {
    fn default() -> Self {
        Handler::Field
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Field => f.write_str("Field"),
            Handler::One(_) => f.write_str("One(..)"),
            Handler::Many(extractors) => write!(f, "Many({})", extractors.len()),
        }
    }
}

/// A named unit of table structure rendering one or more cells per row.
///
/// The extractor list is never empty: a column declared without a handler,
/// or with an empty list, reads `row[id]`.
pub struct Column<R> {
    id: String,
    label: String,
    extractors: Vec<Extractor<R>>,
    sortable: bool,
}

impl<R: Record + 'static> Column<R> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        handler: Handler<R>,
        sortable: bool,
    ) -> Self {
        let id = id.into();
        let extractors = match handler {
            Handler::One(extractor) => vec![extractor],
            Handler::Many(extractors) if !extractors.is_empty() => extractors,
            Handler::Field | Handler::Many(_) => vec![field_extractor(id.clone())],
        };

        Self {
            id,
            label: label.into(),
            extractors,
            sortable,
        }
    }

    /// Column reading `row[id]`.
    pub fn field(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, Handler::Field, false)
    }
}

impl<R> Column<R> {
    /// Builder-style toggle of the sortable flag.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Number of cells this column contributes to each row.
    pub fn cell_count(&self) -> usize {
        self.extractors.len()
    }

    pub fn render_cells(&self, row: &R) -> Vec<Cell> {
        self.extractors.iter().map(|extract| extract(row)).collect()
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("cells", &self.extractors.len())
            .field("sortable", &self.sortable)
            .finish()
    }
}
