use super::forms::{AddProductForm, BuyStockForm, SellStockForm};
use super::product_table::ProductTable;
use super::summary::SummaryWidgets;
use crate::dashboards::d001_inventory::view_model::InventoryDashboardViewModel;
use leptos::prelude::*;

#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let vm = leptos::context::use_context::<InventoryDashboardViewModel>()
        .expect("InventoryDashboardViewModel not provided in context");

    view! {
        <div class="inventory-dashboard">
            <SummaryWidgets vm=vm />
            <div class="inventory-dashboard__body">
                <div class="inventory-dashboard__table">
                    <ProductTable vm=vm />
                </div>
                <div class="inventory-dashboard__actions">
                    <AddProductForm vm=vm />
                    <BuyStockForm vm=vm />
                    <SellStockForm vm=vm />
                </div>
            </div>
        </div>
    }
}
