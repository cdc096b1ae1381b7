use std::fmt;

use super::records::{read_field, stringify, Row};

/// Renders a cell of a row for display
pub type RenderFn = fn(&dyn Row) -> String;

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Column of a list screen
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Field name (or dotted path) read from each record
    pub key: String,
    /// Header label
    pub title: String,
    pub sortable: bool,
    pub render: Option<RenderFn>,
    pub align: Align,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: true,
            render: None,
            align: Align::Left,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn render_with(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    /// Right alignment, for numeric columns
    pub fn align_right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    /// Text the search filter matches against: the raw value, never the rendered one
    pub fn search_text<R: Row + ?Sized>(&self, row: &R) -> String {
        stringify(read_field(row, &self.key))
    }

    /// Display text of the cell
    pub fn render_cell(&self, row: &dyn Row) -> String {
        match self.render {
            Some(render) => render(row),
            None => stringify(read_field(row, &self.key)),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .field("align", &self.align)
            .finish()
    }
}

/// Looks up a column by key
pub fn find_column<'a>(columns: &'a [ColumnDescriptor], key: &str) -> Option<&'a ColumnDescriptor> {
    columns.iter().find(|column| column.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::records::Record;
    use serde_json::json;

    fn upper_name(row: &dyn Row) -> String {
        stringify(read_field(row, "name")).to_uppercase()
    }

    #[test]
    fn test_defaults() {
        let column = ColumnDescriptor::new("name", "Nom");
        assert!(column.sortable);
        assert!(column.render.is_none());
        assert_eq!(column.align, Align::Left);
        assert!(!column.clone().not_sortable().sortable);
    }

    #[test]
    fn test_render_cell_uses_render_fn() {
        let row: Record = serde_json::from_value(json!({"name": "Tomate", "qty": 5})).unwrap();

        let plain = ColumnDescriptor::new("qty", "Qté");
        assert_eq!(plain.render_cell(&row), "5");

        let rendered = ColumnDescriptor::new("name", "Nom").render_with(upper_name);
        assert_eq!(rendered.render_cell(&row), "TOMATE");
        // searching still sees the raw value
        assert_eq!(rendered.search_text(&row), "Tomate");

        let missing = ColumnDescriptor::new("dlc", "DLC");
        assert_eq!(missing.render_cell(&row), "");
    }

    #[test]
    fn test_find_column() {
        let columns = vec![
            ColumnDescriptor::new("name", "Nom"),
            ColumnDescriptor::new("actions", "").not_sortable(),
        ];
        assert!(find_column(&columns, "actions").is_some_and(|c| !c.sortable));
        assert!(find_column(&columns, "qty").is_none());
    }
}
