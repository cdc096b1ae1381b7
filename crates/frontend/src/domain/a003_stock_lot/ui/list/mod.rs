use contracts::shared::list_query::SortDirection;

use crate::shared::columns::ColumnDescriptor;
use crate::shared::config::ListConfig;
use crate::shared::format::{date_cell, quantity_cell};
use crate::shared::list_state::ListState;
use crate::shared::records::{read_field, Row};

/// Колонки списка партий. DLC передаётся как есть, форматируется только отображение.
pub fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("lotNumber", "Lot"),
        ColumnDescriptor::new("product.name", "Produit"),
        ColumnDescriptor::new("quantity", "Quantité")
            .render_with(render_quantity)
            .align_right(),
        ColumnDescriptor::new("receivedAt", "Réception").render_with(render_received_at),
        ColumnDescriptor::new("dlc", "DLC").render_with(render_dlc),
    ]
}

/// Lots closest to expiry first
pub fn create_state(config: &ListConfig) -> ListState {
    let mut state = ListState::from_config(config);
    state.query.sort_key = Some("dlc".to_string());
    state.query.sort_direction = SortDirection::Asc;
    state
}

fn render_quantity(row: &dyn Row) -> String {
    quantity_cell(read_field(row, "quantity"))
}

fn render_received_at(row: &dyn Row) -> String {
    date_cell(read_field(row, "receivedAt"))
}

fn render_dlc(row: &dyn Row) -> String {
    date_cell(read_field(row, "dlc"))
}
