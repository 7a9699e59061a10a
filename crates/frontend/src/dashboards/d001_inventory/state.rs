//! Typed view state of the dashboard regions and the pure synchronizer that folds a
//! mutation result into it.

use super::api::{MutationPayload, StockChange};
use contracts::dashboards::d001_inventory_summary::{DashboardBootstrap, SummarySnapshot};
use contracts::domain::a001_product::{ProductView, StockStatus};

pub const BOOTSTRAP_ELEMENT_ID: &str = "dashboard-bootstrap";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub product: ProductView,
    pub status: StockStatus,
}

impl ProductRow {
    pub fn new(product: ProductView) -> Self {
        let status = product.derived_status();
        Self { product, status }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTableState {
    /// Newest insertions first
    pub rows: Vec<ProductRow>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for ProductTableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl ProductTableState {
    pub fn contains(&self, id: i64) -> bool {
        self.rows.iter().any(|r| r.product.id == id)
    }

    pub fn row(&self, id: i64) -> Option<&ProductRow> {
        self.rows.iter().find(|r| r.product.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Buy,
    Sell,
}

impl SelectionKind {
    pub const ALL: [SelectionKind; 2] = [SelectionKind::Buy, SelectionKind::Sell];

    pub fn element_id(&self) -> &'static str {
        match self {
            SelectionKind::Buy => "buy-product-id",
            SelectionKind::Sell => "sell-product-id",
        }
    }

    /// Label of an option whose cached stock was just refreshed
    fn restocked_label(&self, name: &str, stock: i64) -> String {
        match self {
            SelectionKind::Buy => format!("{} (Stock: {})", name, stock),
            SelectionKind::Sell => format!("{} (Available: {})", name, stock),
        }
    }
}

/// One picker entry. `cached_stock` is advisory; the server re-checks every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOption {
    pub product_id: i64,
    pub name: String,
    pub sku: String,
    pub cached_stock: i64,
    pub label: String,
}

impl SelectionOption {
    pub fn from_product(product: &ProductView) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            sku: product.sku.clone(),
            cached_stock: product.current_stock,
            label: format!("{} (SKU: {})", product.name, product.sku),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionList {
    pub kind: SelectionKind,
    pub options: Vec<SelectionOption>,
}

impl SelectionList {
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
        }
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.options.iter().any(|o| o.product_id == product_id)
    }

    pub fn cached_stock(&self, product_id: i64) -> Option<i64> {
        self.options
            .iter()
            .find(|o| o.product_id == product_id)
            .map(|o| o.cached_stock)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewState {
    pub table: ProductTableState,
    pub summary: SummarySnapshot,
    pub buy: SelectionList,
    pub sell: SelectionList,
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self {
            table: ProductTableState::default(),
            summary: SummarySnapshot::default(),
            buy: SelectionList::new(SelectionKind::Buy),
            sell: SelectionList::new(SelectionKind::Sell),
        }
    }
}

impl DashboardViewState {
    pub fn from_bootstrap(bootstrap: DashboardBootstrap) -> Self {
        // pickers list the whole catalog; fall back to the visible page when it is absent
        let catalog = if bootstrap.catalog.is_empty() {
            &bootstrap.products
        } else {
            &bootstrap.catalog
        };
        let options: Vec<SelectionOption> = catalog.iter().map(SelectionOption::from_product).collect();

        Self {
            buy: SelectionList {
                kind: SelectionKind::Buy,
                options: options.clone(),
            },
            sell: SelectionList {
                kind: SelectionKind::Sell,
                options,
            },
            table: ProductTableState {
                rows: bootstrap.products.into_iter().map(ProductRow::new).collect(),
                current_page: bootstrap.current_page,
                total_pages: bootstrap.total_pages,
            },
            summary: bootstrap.summary,
        }
    }

    pub fn list(&self, kind: SelectionKind) -> &SelectionList {
        match kind {
            SelectionKind::Buy => &self.buy,
            SelectionKind::Sell => &self.sell,
        }
    }

    fn list_mut(&mut self, kind: SelectionKind) -> &mut SelectionList {
        match kind {
            SelectionKind::Buy => &mut self.buy,
            SelectionKind::Sell => &mut self.sell,
        }
    }
}

/// Parses the JSON snapshot the server embeds in the host page
pub fn parse_bootstrap(raw: &str) -> Result<DashboardBootstrap, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid dashboard bootstrap: {}", e))
}

/// Initial state from the host page's bootstrap block
pub fn load_initial_state() -> Result<DashboardViewState, String> {
    initial_state_from(crate::shared::dom::element_text(BOOTSTRAP_ELEMENT_ID).as_deref())
}

pub fn initial_state_from(raw: Option<&str>) -> Result<DashboardViewState, String> {
    let raw = raw.ok_or_else(|| format!("no #{} element", BOOTSTRAP_ELEMENT_ID))?;
    parse_bootstrap(raw).map(DashboardViewState::from_bootstrap)
}

/// What a synchronization changed; drives the transient highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPatch {
    RowInserted(i64),
    SummaryReplaced,
    StockUpdated(i64),
    OptionInserted(SelectionKind, i64),
    OptionRestocked(SelectionKind, i64),
}

/// Folds an accepted mutation into the view state.
///
/// Steps run in fixed order: new product, summary, stock change. Inserting a product
/// that is already present is a no-op, so replaying a result is harmless.
pub fn synchronize(
    prior: &DashboardViewState,
    payload: &MutationPayload,
) -> (DashboardViewState, Vec<ViewPatch>) {
    let mut next = prior.clone();
    let mut patches = Vec::new();

    if let Some(product) = &payload.product {
        insert_product(&mut next, product, &mut patches);
    }

    if let Some(summary) = &payload.summary {
        next.summary = summary.clone();
        patches.push(ViewPatch::SummaryReplaced);
    }

    if let Some(change) = &payload.stock_change {
        apply_stock_change(&mut next, change, &mut patches);
    }

    (next, patches)
}

fn insert_product(state: &mut DashboardViewState, product: &ProductView, patches: &mut Vec<ViewPatch>) {
    if !state.table.contains(product.id) {
        state.table.rows.insert(0, ProductRow::new(product.clone()));
        patches.push(ViewPatch::RowInserted(product.id));
    }

    for kind in SelectionKind::ALL {
        let list = state.list_mut(kind);
        if !list.contains(product.id) {
            list.options.push(SelectionOption::from_product(product));
            patches.push(ViewPatch::OptionInserted(kind, product.id));
        }
    }
}

fn apply_stock_change(state: &mut DashboardViewState, change: &StockChange, patches: &mut Vec<ViewPatch>) {
    if let Some(row) = state
        .table
        .rows
        .iter_mut()
        .find(|r| r.product.id == change.product_id)
    {
        row.product.current_stock = change.new_stock;
        if let Some(status) = change.status {
            row.status = status;
        }
        patches.push(ViewPatch::StockUpdated(change.product_id));
    }

    for kind in SelectionKind::ALL {
        let list = state.list_mut(kind);
        if let Some(option) = list
            .options
            .iter_mut()
            .find(|o| o.product_id == change.product_id)
        {
            option.cached_stock = change.new_stock;
            option.label = kind.restocked_label(&option.name, change.new_stock);
            patches.push(ViewPatch::OptionRestocked(kind, change.product_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductView {
        ProductView {
            id: 7,
            name: "Widget".to_string(),
            sku: "W-1".to_string(),
            price: 9.5,
            current_stock: 10,
            reorder_level: 5,
        }
    }

    fn add_result(product: ProductView) -> MutationPayload {
        MutationPayload {
            message: "Product created successfully".to_string(),
            product: Some(product),
            summary: Some(SummarySnapshot {
                total_items: 1,
                total_value: 95.0,
                low_stock_count: 0,
            }),
            stock_change: None,
        }
    }

    fn stock_result(new_stock: i64, status: StockStatus) -> MutationPayload {
        MutationPayload {
            message: "Success".to_string(),
            product: None,
            summary: Some(SummarySnapshot {
                total_items: 1,
                total_value: 142.5,
                low_stock_count: 0,
            }),
            stock_change: Some(StockChange {
                product_id: 7,
                new_stock,
                status: Some(status),
            }),
        }
    }

    #[test]
    fn test_add_product_inserts_row_and_options() {
        let (state, patches) = synchronize(&DashboardViewState::default(), &add_result(widget()));

        assert_eq!(state.table.rows.len(), 1);
        assert_eq!(state.table.rows[0].status, StockStatus::Ok);
        assert_eq!(state.buy.options.len(), 1);
        assert_eq!(state.sell.options.len(), 1);
        assert_eq!(state.sell.options[0].label, "Widget (SKU: W-1)");
        assert_eq!(state.sell.cached_stock(7), Some(10));
        assert_eq!(
            patches,
            vec![
                ViewPatch::RowInserted(7),
                ViewPatch::OptionInserted(SelectionKind::Buy, 7),
                ViewPatch::OptionInserted(SelectionKind::Sell, 7),
                ViewPatch::SummaryReplaced,
            ]
        );
    }

    #[test]
    fn test_new_row_goes_on_top() {
        let mut first = widget();
        first.id = 1;
        let (state, _) = synchronize(&DashboardViewState::default(), &add_result(first));
        let (state, _) = synchronize(&state, &add_result(widget()));
        assert_eq!(state.table.rows[0].product.id, 7);
        assert_eq!(state.table.rows[1].product.id, 1);
    }

    #[test]
    fn test_replayed_add_is_idempotent() {
        let result = add_result(widget());
        let (once, _) = synchronize(&DashboardViewState::default(), &result);
        let (twice, patches) = synchronize(&once, &result);
        let (thrice, _) = synchronize(&twice, &result);

        assert_eq!(thrice.table.rows.iter().filter(|r| r.product.id == 7).count(), 1);
        assert_eq!(thrice.buy.options.len(), 1);
        assert_eq!(thrice.sell.options.len(), 1);
        assert_eq!(patches, vec![ViewPatch::SummaryReplaced]);
    }

    #[test]
    fn test_low_badge_at_reorder_level() {
        let mut product = widget();
        product.current_stock = 5;
        let (state, _) = synchronize(&DashboardViewState::default(), &add_result(product));
        assert_eq!(state.table.rows[0].status, StockStatus::Low);
    }

    #[test]
    fn test_buy_updates_stock_summary_and_options() {
        let (state, _) = synchronize(&DashboardViewState::default(), &add_result(widget()));
        let (state, patches) = synchronize(&state, &stock_result(15, StockStatus::Ok));

        let row = state.table.row(7).unwrap();
        assert_eq!(row.product.current_stock, 15);
        assert_eq!(row.status, StockStatus::Ok);
        assert_eq!(state.summary.total_items, 1);
        assert_eq!(state.summary.total_value, 142.5);
        assert_eq!(state.summary.low_stock_count, 0);
        assert_eq!(state.buy.cached_stock(7), Some(15));
        assert_eq!(state.sell.cached_stock(7), Some(15));
        assert_eq!(state.sell.options[0].label, "Widget (Available: 15)");
        assert_eq!(state.buy.options[0].label, "Widget (Stock: 15)");
        assert!(patches.contains(&ViewPatch::StockUpdated(7)));
    }

    #[test]
    fn test_status_is_taken_verbatim() {
        // 15 is well above the reorder level of 5, yet the server's word wins
        let (state, _) = synchronize(&DashboardViewState::default(), &add_result(widget()));
        let (state, _) = synchronize(&state, &stock_result(15, StockStatus::Low));
        assert_eq!(state.table.row(7).unwrap().status, StockStatus::Low);
    }

    #[test]
    fn test_stock_change_without_status_keeps_badge() {
        let (state, _) = synchronize(&DashboardViewState::default(), &add_result(widget()));
        let mut result = stock_result(3, StockStatus::Ok);
        if let Some(change) = result.stock_change.as_mut() {
            change.status = None;
        }
        let (state, _) = synchronize(&state, &result);
        let row = state.table.row(7).unwrap();
        assert_eq!(row.product.current_stock, 3);
        assert_eq!(row.status, StockStatus::Ok);
    }

    #[test]
    fn test_summary_replacement_is_total() {
        let mut prior = DashboardViewState::default();
        prior.summary = SummarySnapshot {
            total_items: 40,
            total_value: 9999.99,
            low_stock_count: 12,
        };
        let (state, _) = synchronize(&prior, &stock_result(15, StockStatus::Ok));
        assert_eq!(
            state.summary,
            SummarySnapshot {
                total_items: 1,
                total_value: 142.5,
                low_stock_count: 0
            }
        );
    }

    #[test]
    fn test_stock_change_for_row_on_other_page() {
        let bootstrap = DashboardBootstrap {
            catalog: vec![widget()],
            ..Default::default()
        };
        let prior = DashboardViewState::from_bootstrap(bootstrap);
        let (state, patches) = synchronize(&prior, &stock_result(2, StockStatus::Low));
        assert!(state.table.rows.is_empty());
        assert_eq!(state.sell.cached_stock(7), Some(2));
        assert!(!patches.contains(&ViewPatch::StockUpdated(7)));
    }

    #[test]
    fn test_bootstrap_falls_back_to_page_rows_for_pickers() {
        let raw = r#"{"summary": {"total_items": 1, "total_value": 95, "low_stock_count": 0},
                      "products": [{"id": 7, "name": "Widget", "sku": "W-1", "price": 9.5,
                                    "current_stock": 10, "reorder_level": 5}],
                      "current_page": 2, "total_pages": 3}"#;
        let state = DashboardViewState::from_bootstrap(parse_bootstrap(raw).unwrap());
        assert_eq!(state.table.current_page, 2);
        assert_eq!(state.table.total_pages, 3);
        assert_eq!(state.buy.options.len(), 1);
        assert_eq!(state.sell.cached_stock(7), Some(10));
    }

    #[test]
    fn test_malformed_bootstrap() {
        assert!(parse_bootstrap("not json").is_err());
        assert!(initial_state_from(Some("not json")).is_err());
    }

    #[test]
    fn test_missing_bootstrap_names_the_element() {
        let err = initial_state_from(None).unwrap_err();
        assert!(err.contains(BOOTSTRAP_ELEMENT_ID));
    }
}
