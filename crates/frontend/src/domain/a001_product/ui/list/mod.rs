use crate::shared::columns::ColumnDescriptor;
use crate::shared::config::ListConfig;
use crate::shared::format::quantity_cell;
use crate::shared::list_state::ListState;
use crate::shared::records::{read_field, stringify, Row};

/// Колонки списка продуктов
pub fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", "Produit"),
        ColumnDescriptor::new("category", "Catégorie"),
        ColumnDescriptor::new("stockQty", "Stock")
            .render_with(render_stock)
            .align_right(),
        ColumnDescriptor::new("minStock", "Stock min.")
            .render_with(render_min_stock)
            .align_right(),
        ColumnDescriptor::new("isActive", "Actif")
            .render_with(render_active)
            .not_sortable(),
    ]
}

pub fn create_state(config: &ListConfig) -> ListState {
    let mut state = ListState::from_config(config);
    state.query.sort_key = Some("name".to_string());
    state
}

fn render_stock(row: &dyn Row) -> String {
    let qty = quantity_cell(read_field(row, "stockQty"));
    let unit = stringify(read_field(row, "unit"));
    if unit.is_empty() || qty.is_empty() {
        qty
    } else {
        format!("{qty} {unit}")
    }
}

fn render_min_stock(row: &dyn Row) -> String {
    quantity_cell(read_field(row, "minStock"))
}

fn render_active(row: &dyn Row) -> String {
    match read_field(row, "isActive").and_then(|v| v.as_bool()) {
        Some(false) => "Non".to_string(),
        _ => "Oui".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use crate::shared::records::to_records;
    use contracts::domain::a001_product::aggregate::Product;

    fn products() -> Vec<Product> {
        let mut tomate = Product::new("Tomate", "Légumes", "kg");
        tomate.stock_qty = 5.0;
        let mut farine = Product::new("Farine T55", "Épicerie", "kg");
        farine.stock_qty = 1250.5;
        farine.is_active = false;
        let mut cerise = Product::new("tomate cerise", "Légumes", "barquette");
        cerise.stock_qty = 2.0;
        vec![tomate, farine, cerise]
    }

    #[test]
    fn test_render_cells() {
        let records = to_records(&products()).unwrap();
        let columns = columns();

        assert_eq!(columns[2].render_cell(&records[1]), "1 250.5 kg");
        assert_eq!(columns[4].render_cell(&records[1]), "Non");
        assert_eq!(columns[4].render_cell(&records[0]), "Oui");
        assert!(!columns[4].sortable);
    }

    #[test]
    fn test_search_float_quantities_as_integers() {
        let records = to_records(&products()).unwrap();
        let columns = columns();

        assert_eq!(columns[2].search_text(&records[0]), "5");
        assert!(filter_list(&records, ".0", &columns).is_empty());

        let found = filter_list(&records, "1250.5", &columns);
        assert_eq!(found.len(), 1);
        assert_eq!(stringify(read_field(&found[0], "name")), "Farine T55");
    }

    #[test]
    fn test_list_screen_flow() {
        let records = to_records(&products()).unwrap();
        let columns = columns();
        let mut state = create_state(&ListConfig::default());

        let view = state.view(&records, &columns);
        let names: Vec<String> = view
            .rows
            .iter()
            .map(|r| stringify(read_field(*r, "name")))
            .collect();
        // byte order: uppercase before lowercase
        assert_eq!(names, ["Farine T55", "Tomate", "tomate cerise"]);

        state.set_search("légumes");
        let view = state.view(&records, &columns);
        assert_eq!(view.page_info.total_items, 2);
    }
}
