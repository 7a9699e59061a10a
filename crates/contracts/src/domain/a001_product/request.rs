use serde::{Deserialize, Serialize};

/// Form fields of the "add product" action.
///
/// Numeric fields travel as the raw text the user typed; the server parses and validates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub initial_stock: String,
    pub reorder_level: String,
}

/// Form fields of the "buy" and "sell" actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockMoveRequest {
    pub product_id: String,
    pub quantity: String,
}
