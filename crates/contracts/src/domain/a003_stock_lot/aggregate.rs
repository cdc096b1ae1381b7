use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_product::aggregate::ProductId;

// ============================================================================
// ID Type
// ============================================================================

/// Stock lot identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockLotId(pub Uuid);

impl StockLotId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Quantity of one product received in a single delivery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLot {
    pub id: StockLotId,
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "lotNumber")]
    pub lot_number: String,
    pub quantity: f64,
    #[serde(rename = "receivedAt")]
    pub received_at: NaiveDate,
    /// Date limite de consommation (use-by date), passed through as received
    #[serde(default)]
    pub dlc: Option<NaiveDate>,
}

impl StockLot {
    /// Use-by date is strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.dlc.is_some_and(|dlc| dlc < today)
    }
}

// ============================================================================
// Stock deduction request
// ============================================================================

/// Deduction policy label; the backend performs the actual decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionPolicy {
    /// First in, first out (oldest `receivedAt` first)
    #[default]
    Fifo,
    /// First expired, first out (earliest `dlc` first)
    Fefo,
}

/// Body of `POST /inventory/deduct-fifo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductStockRequest {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub quantity: f64,
    #[serde(default)]
    pub policy: DeductionPolicy,
    #[serde(default)]
    pub reason: Option<String>,
}

pub const DEDUCT_STOCK_ENDPOINT: &str = "/inventory/deduct-fifo";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dlc_roundtrips_as_iso_date() {
        let json = r#"{
            "id": "5b0f8a4e-2c1d-4e7a-9f3b-6a2d1c0e9b87",
            "productId": "7d3f1c1e-9a5b-4f53-b1d6-0c3b8e6f2a10",
            "lotNumber": "L-2024-118",
            "quantity": 12.5,
            "receivedAt": "2024-03-01",
            "dlc": "2024-03-15"
        }"#;
        let lot: StockLot = serde_json::from_str(json).unwrap();
        assert_eq!(lot.dlc, NaiveDate::from_ymd_opt(2024, 3, 15));

        let value = serde_json::to_value(&lot).unwrap();
        assert_eq!(value["dlc"], "2024-03-15");
    }

    #[test]
    fn test_is_expired() {
        let lot = StockLot {
            id: StockLotId::new_v4(),
            product_id: ProductId::new_v4(),
            lot_number: "L1".to_string(),
            quantity: 1.0,
            received_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            dlc: NaiveDate::from_ymd_opt(2024, 3, 10),
        };
        assert!(!lot.is_expired(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
        assert!(lot.is_expired(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()));
    }

    #[test]
    fn test_deduct_request_policy_label() {
        let request = DeductStockRequest {
            product_id: ProductId::new_v4(),
            quantity: 3.0,
            policy: DeductionPolicy::Fefo,
            reason: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["policy"], "fefo");

        let parsed: DeductStockRequest = serde_json::from_value(serde_json::json!({
            "productId": "7d3f1c1e-9a5b-4f53-b1d6-0c3b8e6f2a10",
            "quantity": 1.0
        }))
        .unwrap();
        assert_eq!(parsed.policy, DeductionPolicy::Fifo);
    }
}
