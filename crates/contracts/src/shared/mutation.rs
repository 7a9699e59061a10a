use crate::dashboards::d001_inventory_summary::SummarySnapshot;
use crate::domain::a001_product::{ProductView, StockStatus};
use serde::{Deserialize, Serialize};

/// JSON body returned by every mutating action (`/add_product`, `/buy`, `/sell`).
///
/// Outcome is decided by `success`, not by the HTTP status: rejections come back
/// as 400 with the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummarySnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
}
