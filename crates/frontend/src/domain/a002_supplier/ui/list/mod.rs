use crate::shared::columns::ColumnDescriptor;
use crate::shared::config::ListConfig;
use crate::shared::list_state::ListState;

pub fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("name", "Fournisseur"),
        ColumnDescriptor::new("city", "Ville"),
        ColumnDescriptor::new("contactEmail", "E-mail"),
        ColumnDescriptor::new("phone", "Téléphone").not_sortable(),
    ]
}

pub fn create_state(config: &ListConfig) -> ListState {
    ListState::from_config(config)
}
