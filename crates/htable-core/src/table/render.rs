//! HTML output for [`Table`].

use super::column::Column;
use super::model::Table;
use crate::display::html::{Tag, escape};
use crate::error::TableError;
use crate::query::QueryParams;
use log::trace;
use std::borrow::Cow;

impl<R> Table<R> {
    /// Render the whole table: `<table><thead>..</thead><tbody>..</tbody></table>`.
    pub fn render(&self) -> String {
        trace!(
            "Rendering table with {} columns and {} rows",
            self.columns.len(),
            self.rows.len()
        );
        let mut content = self.header();
        content.push_str(&self.body());
        Tag::new("table").wrap(&content)
    }

    /// `<thead>` with one header row holding a `<th>` per column.
    pub fn header(&self) -> String {
        let cells: String = self
            .columns
            .values()
            .map(|column| self.header_cell_for(column))
            .collect();
        Tag::new("thead").wrap(&Tag::new("tr").wrap(&cells))
    }

    /// The `<th>` of a single column.
    pub fn header_cell(&self, id: &str) -> Result<String, TableError> {
        let column = self.column(id)?;
        Ok(self.header_cell_for(column))
    }

    /// `<tbody>` with the data rows, or the empty-state row.
    pub fn body(&self) -> String {
        if self.rows.is_empty() {
            let cell = Tag::new("td")
                .attr("colspan", self.cell_count().to_string())
                .wrap(&self.text(&self.empty_text));
            return Tag::new("tbody")
                .attr("class", "empty")
                .wrap(&Tag::new("tr").wrap(&cell));
        }

        let rows: String = self
            .rows
            .iter()
            .map(|row| Tag::new("tr").wrap(&self.row_cells(row).concat()))
            .collect();
        Tag::new("tbody").wrap(&rows)
    }

    /// The `<td>` elements of one row, all columns in order.
    pub fn row_cells(&self, row: &R) -> Vec<String> {
        self.columns
            .values()
            .flat_map(|column| self.cells_for(column, row))
            .collect()
    }

    /// The `<td>` elements one column contributes to `row`.
    pub fn column_cells(&self, id: &str, row: &R) -> Result<Vec<String>, TableError> {
        let column = self.column(id)?;
        Ok(self.cells_for(column, row))
    }

    /// Parameters a click on the column's header would request: the incoming
    /// snapshot with the sort field set to `id` and the order flipped.
    ///
    /// Every other incoming parameter is carried over unchanged.
    pub fn sort_link_params(&self, id: &str) -> QueryParams {
        self.params
            .with(self.sort_field_name.as_str(), id)
            .with(
                self.sort_order_name.as_str(),
                self.sort_order.toggled().as_param(),
            )
    }

    /// Link target for a sortable column's header.
    pub fn sort_link_href(&self, id: &str) -> String {
        format!("?{}", self.encoder.encode(&self.sort_link_params(id)))
    }

    /// CSS classes for a sortable column's header and link.
    pub fn sortable_classes(&self, id: &str) -> String {
        let mut class = String::from("sortable");
        if self.sort_field() == Some(id) {
            class.push_str(" sorted sorted-");
            class.push_str(self.sort_order.as_param());
        }
        class
    }

    fn header_cell_for(&self, column: &Column<R>) -> String {
        let mut th = Tag::new("th");
        let label = if column.is_sortable() {
            let class = self.sortable_classes(column.id());
            th = th.attr("class", class.clone());
            Tag::new("a")
                .attr("href", self.sort_link_href(column.id()))
                .attr("class", class)
                .wrap(&self.text(column.label()))
        } else {
            self.text(column.label()).into_owned()
        };

        let span = column.cell_count();
        th.attr_opt("colspan", (span > 1).then(|| span.to_string()))
            .wrap(&label)
    }

    fn cells_for(&self, column: &Column<R>, row: &R) -> Vec<String> {
        column
            .render_cells(row)
            .iter()
            .map(|cell| Tag::new("td").wrap(&cell.to_html(self.escape)))
            .collect()
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::QueryParams;
    use crate::table::{Cell, Column, Handler, Row, SortOrder, Table, extractor, field_extractor};
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().cloned().unwrap_or_default()
    }

    fn two_column_table(query: &str) -> Table {
        let mut table = Table::new(QueryParams::from_query_string(query));
        table.add_column("A", "A", Handler::field(), true);
        table.add_column("B", "B", Handler::field(), false);
        table
    }

    #[test]
    fn test_render_two_columns_two_rows() {
        let mut table = two_column_table("");
        table.add_rows(vec![row(json!({"A": 1, "B": 2})), row(json!({"A": 3, "B": 4}))]);

        assert_eq!(
            table.render(),
            "<table><thead><tr>\
             <th class=\"sortable\"><a href=\"?sort=A&amp;order=desc\" class=\"sortable\">A</a></th>\
             <th>B</th>\
             </tr></thead><tbody>\
             <tr><td>1</td><td>2</td></tr>\
             <tr><td>3</td><td>4</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn test_active_descending_sort() {
        let table = two_column_table("sort=A&order=desc");
        assert_eq!(table.sort_field(), Some("A"));
        assert_eq!(table.sort_order(), SortOrder::Descending);
        assert_eq!(table.sortable_classes("A"), "sortable sorted sorted-desc");

        let header = table.header_cell("A").expect("column A");
        assert!(header.starts_with("<th class=\"sortable sorted sorted-desc\">"));
        assert!(header.contains("class=\"sortable sorted sorted-desc\">A</a>"));

        let next = table.sort_link_params("A");
        assert_eq!(next.get("sort"), Some("A"));
        assert_eq!(next.get("order"), Some("asc"));
        assert_eq!(table.sort_link_href("A"), "?sort=A&order=asc");
    }

    #[test]
    fn test_active_ascending_sort_proposes_desc() {
        let table = two_column_table("sort=A");
        assert_eq!(table.sortable_classes("A"), "sortable sorted sorted-asc");
        assert_eq!(table.sort_link_params("A").get("order"), Some("desc"));
    }

    #[test]
    fn test_unsortable_sort_field_never_marked_sorted() {
        let table = two_column_table("sort=B&order=asc");
        assert_eq!(table.sort_field(), None);
        assert!(!table.header().contains("sorted"));
    }

    #[test]
    fn test_sort_link_toggles_regardless_of_column() {
        let mut table = two_column_table("sort=A&order=desc");
        table.add_column("C", "C", Handler::field(), true);
        // C is not the sorted column, but the proposal still flips the current order
        assert_eq!(table.sort_link_params("C").get("order"), Some("asc"));
        assert_eq!(table.sortable_classes("C"), "sortable");
    }

    #[test]
    fn test_sort_link_keeps_other_params() {
        let table = two_column_table("page=3&q=red+shoes&sort=B");
        assert_eq!(
            table.sort_link_href("A"),
            "?page=3&q=red%20shoes&sort=A&order=desc"
        );
    }

    #[test]
    fn test_custom_encoder() {
        let mut table: Table = Table::builder()
            .params(QueryParams::from_query_string("sort=A"))
            .encoder(|params: &QueryParams| {
                params
                    .iter()
                    .map(|(k, v)| format!("{k}:{v}"))
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .build();
        table.add_column("A", "A", Handler::field(), true);
        assert_eq!(table.sort_link_href("A"), "?sort:A;order:desc");
    }

    #[test]
    fn test_empty_body_spans_all_cells() {
        let mut table: Table = Table::new(QueryParams::new());
        table.add_column("name", "Name", Handler::fields(["first", "last"]), false);
        table.add_column("age", "Age", Handler::field(), true);
        table.set_empty_text("No people");

        assert_eq!(
            table.body(),
            "<tbody class=\"empty\"><tr><td colspan=\"3\">No people</td></tr></tbody>"
        );
    }

    #[test]
    fn test_empty_body_without_columns() {
        let table: Table = Table::new(QueryParams::new());
        assert_eq!(
            table.render(),
            "<table><thead><tr></tr></thead>\
             <tbody class=\"empty\"><tr><td colspan=\"0\"></td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_multi_cell_column_colspan() {
        let mut table: Table = Table::new(QueryParams::new());
        table.add_column("name", "Name", Handler::fields(["first", "last"]), true);
        table.add_column("id", "ID", Handler::field(), false);
        table.add_row(row(json!({"first": "Ada", "last": "Lovelace", "id": 1})));

        let header = table.header();
        assert!(header.contains("<th class=\"sortable\" colspan=\"2\">"));
        assert!(header.contains("<th>ID</th>"));
        assert_eq!(
            table.body(),
            "<tbody><tr><td>Ada</td><td>Lovelace</td><td>1</td></tr></tbody>"
        );
    }

    #[test]
    fn test_escaping_policy() {
        let mut table: Table = Table::new(QueryParams::from_query_string("x=%22%3E"));
        table.add_column("html", "<b>Label</b>", Handler::field(), true);
        table.add_column(
            "link",
            "Link",
            Handler::many(vec![
                extractor(|r: &Row| {
                    let id = r.get("id").and_then(|v| v.as_i64()).unwrap_or(0);
                    Cell::markup(format!("<a href=\"/items/{id}\">open</a>"))
                }),
                field_extractor("html"),
            ]),
            false,
        );
        table.add_row(row(json!({"html": "<script>", "id": 9})));

        let html = table.render();
        assert!(html.contains("&lt;b&gt;Label&lt;/b&gt;"));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td><a href=\"/items/9\">open</a></td>"));
        assert!(html.contains("href=\"?x=%22%3E&amp;sort=html&amp;order=desc\""));

        table.set_escape(false);
        let raw = table.render();
        assert!(raw.contains("<b>Label</b>"));
        assert!(raw.contains("<td><script></td>"));
    }

    #[test]
    fn test_lookup_errors_on_bad_id() {
        let table = two_column_table("");
        assert!(table.header_cell("missing").is_err());
        assert!(table.column_cells("missing", &Row::new()).is_err());
        assert_eq!(
            table.column_cells("A", &row(json!({"A": "x"}))).expect("column A"),
            vec!["<td>x</td>".to_string()]
        );
    }

    #[test]
    fn test_builder_columns_and_rows() {
        let table: Table = Table::builder()
            .columns(vec![Column::field("a", "A"), Column::field("b", "B")])
            .row(row(json!({"a": "1", "b": "2"})))
            .empty_text("none")
            .build();
        assert_eq!(
            table.row_cells(&table.rows()[0]),
            vec!["<td>1</td>".to_string(), "<td>2</td>".to_string()]
        );
        assert!(table.render().contains("<tbody><tr><td>1</td><td>2</td></tr></tbody>"));
    }
}
