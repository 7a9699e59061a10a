use crate::domain::a001_product::ProductView;
use serde::{Deserialize, Serialize};

/// Inventory totals. Always replaces the previous snapshot as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    #[serde(default)]
    pub total_items: i64,
    /// Sum of stock * price, rounded by the server to 2 decimals
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub low_stock_count: i64,
}

/// Initial dashboard state embedded by the server into the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBootstrap {
    #[serde(default)]
    pub summary: SummarySnapshot,
    /// Rows of the current product table page
    #[serde(default)]
    pub products: Vec<ProductView>,
    /// Every active product, used to fill the buy/sell pickers
    #[serde(default)]
    pub catalog: Vec<ProductView>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for DashboardBootstrap {
    fn default() -> Self {
        Self {
            summary: SummarySnapshot::default(),
            products: Vec::new(),
            catalog: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}
