use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_supplier::aggregate::SupplierId;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Stock keeping unit of the restaurant (ingredient, beverage, packaging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit of measure ("kg", "l", "pcs")
    pub unit: String,
    #[serde(rename = "stockQty")]
    pub stock_qty: f64,
    #[serde(rename = "minStock", default)]
    pub min_stock: f64,
    #[serde(rename = "supplierId", default)]
    pub supplier_id: Option<SupplierId>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: ProductId::new_v4(),
            name: name.into(),
            category: category.into(),
            unit: unit.into(),
            stock_qty: 0.0,
            min_stock: 0.0,
            supplier_id: None,
            is_active: true,
        }
    }

    /// Stock at or below the reorder threshold
    pub fn is_below_min_stock(&self) -> bool {
        self.stock_qty <= self.min_stock
    }
}
