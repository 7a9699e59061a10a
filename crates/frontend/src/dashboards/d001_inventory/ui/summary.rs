use crate::dashboards::d001_inventory::view_model::InventoryDashboardViewModel;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int};
use leptos::prelude::*;
use thaw::*;

#[component]
fn SummaryCard(
    label: &'static str,
    icon_name: &'static str,
    /// Element id of the value, kept stable for page scripts and tests
    value_id: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <Card>
            <div class="summary-card">
                <div class="summary-card__icon">{icon(icon_name)}</div>
                <div class="summary-card__label">{label}</div>
                <div class="summary-card__value" id=value_id>{move || value.get()}</div>
            </div>
        </Card>
    }
}

#[component]
pub fn SummaryWidgets(vm: InventoryDashboardViewModel) -> impl IntoView {
    let total_items = Signal::derive(move || format_number_int(vm.state.with(|s| s.summary.total_items)));
    let total_value = Signal::derive(move || format_money(vm.state.with(|s| s.summary.total_value)));
    let low_stock = Signal::derive(move || format_number_int(vm.state.with(|s| s.summary.low_stock_count)));

    view! {
        <Flex gap=FlexGap::Medium style="flex-wrap: wrap; margin-bottom: var(--spacing-md);">
            <SummaryCard label="Total items" icon_name="products" value_id="total-items" value=total_items />
            <SummaryCard label="Total value" icon_name="inventory" value_id="total-value" value=total_value />
            <SummaryCard label="Low stock" icon_name="alert" value_id="low-stock-count" value=low_stock />
        </Flex>
    }
}
