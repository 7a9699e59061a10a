use serde::{Deserialize, Serialize};

/// Product as the server reports it after a mutation or in the bootstrap snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_reorder_level")]
    pub reorder_level: i64,
}

fn default_reorder_level() -> i64 {
    5
}

impl ProductView {
    /// Status for a freshly created row. Stock at or below the reorder level needs restocking.
    pub fn derived_status(&self) -> StockStatus {
        StockStatus::from_levels(self.current_stock, self.reorder_level)
    }
}

/// Stock status badge.
///
/// The server sends `"Ok"` or a localized "needs reorder" text (`"Pedir más"`);
/// anything other than `"Ok"` is treated as `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    Ok,
    Low,
}

impl StockStatus {
    pub fn from_levels(current_stock: i64, reorder_level: i64) -> Self {
        if current_stock <= reorder_level {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::Ok => "Ok",
            StockStatus::Low => "Low",
        }
    }

    /// Text shown inside the badge
    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Ok => "Ok",
            StockStatus::Low => "Reorder",
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::Low)
    }
}

impl From<String> for StockStatus {
    fn from(value: String) -> Self {
        if value.trim() == "Ok" {
            StockStatus::Ok
        } else {
            StockStatus::Low
        }
    }
}

impl From<StockStatus> for String {
    fn from(value: StockStatus) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_wire() {
        let ok: StockStatus = serde_json::from_str("\"Ok\"").unwrap();
        let low: StockStatus = serde_json::from_str("\"Pedir más\"").unwrap();
        assert_eq!(ok, StockStatus::Ok);
        assert_eq!(low, StockStatus::Low);
        assert_eq!(serde_json::to_string(&low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_derived_status_boundary() {
        let mut product = ProductView {
            id: 7,
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.5,
            current_stock: 10,
            reorder_level: 5,
        };
        assert_eq!(product.derived_status(), StockStatus::Ok);
        product.current_stock = 5;
        assert_eq!(product.derived_status(), StockStatus::Low);
    }

    #[test]
    fn test_product_defaults() {
        let product: ProductView =
            serde_json::from_str(r#"{"id":1,"name":"Bolt","sku":"B-1","price":2}"#).unwrap();
        assert_eq!(product.current_stock, 0);
        assert_eq!(product.reorder_level, 5);
        assert_eq!(product.price, 2.0);
    }
}
