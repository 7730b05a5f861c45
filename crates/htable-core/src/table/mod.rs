//! Sortable table model and its HTML rendering.
//!
//! A [`Table`] holds an ordered set of [`Column`]s and a list of rows. Each
//! column turns a row into one or more [`Cell`]s through its extractors, and
//! the table wraps them into `<th>`/`<td>` markup. Sort state comes from two
//! query parameters (`sort` and `order` by default) and is reflected back into
//! the header links.
//!
//! ```
//! use htable_core::query::QueryParams;
//! use htable_core::table::{Handler, Row, Table};
//!
//! let mut table: Table = Table::new(QueryParams::from_query_string("sort=name&order=desc"));
//! table.add_column("name", "Name", Handler::field(), true);
//! table.add_column("email", "Email", Handler::field(), false);
//! table.add_row(serde_json::from_str::<Row>(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap());
//!
//! let html = table.render();
//! assert!(html.contains("sortable sorted sorted-desc"));
//! assert!(html.contains("<td>Ada</td><td>ada@example.com</td>"));
//! ```

pub mod cell;
pub mod column;
pub mod model;
pub mod record;
mod render;
pub mod sort;

pub use cell::Cell;
pub use column::{Column, Extractor, Handler, extractor, field_extractor};
pub use model::{DEFAULT_SORT_FIELD_NAME, DEFAULT_SORT_ORDER_NAME, Table, TableBuilder};
pub use record::{Record, Row, value_to_text};
pub use sort::SortOrder;
