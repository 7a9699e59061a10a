use crate::dashboards::d001_inventory::api::MutationAction;
use crate::dashboards::d001_inventory::state::{SelectionKind, SelectionOption};
use crate::dashboards::d001_inventory::view_model::InventoryDashboardViewModel;
use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;

#[component]
fn ProductSelect(
    vm: InventoryDashboardViewModel,
    kind: SelectionKind,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=kind.element_id()
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"Select a product"</option>
            <For
                each=move || vm.state.with(|s| s.list(kind).options.clone())
                key=|opt| (opt.product_id, opt.cached_stock, opt.label.clone())
                children=move |opt: SelectionOption| {
                    let id = opt.product_id.to_string();
                    let selected = {
                        let id = id.clone();
                        move || value.get() == id
                    };
                    view! {
                        <option value=id data-stock=opt.cached_stock.to_string() selected=selected>
                            {opt.label.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}

#[component]
pub fn AddProductForm(vm: InventoryDashboardViewModel) -> impl IntoView {
    let busy = move || vm.is_busy(MutationAction::AddProduct);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_add();
    };

    view! {
        <Card>
            <form id="form-add-product" class="details-form" on:submit=on_submit>
                <h4>"New product"</h4>
                <div class="form-group">
                    <label for="add-name">"Name"</label>
                    <input
                        type="text"
                        id="add-name"
                        required=true
                        prop:value=move || vm.add_form.get().name
                        on:input=move |ev| vm.add_form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="add-sku">"SKU"</label>
                    <input
                        type="text"
                        id="add-sku"
                        required=true
                        prop:value=move || vm.add_form.get().sku
                        on:input=move |ev| vm.add_form.update(|f| f.sku = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="add-price">"Price"</label>
                    <input
                        type="number"
                        id="add-price"
                        min="0"
                        step="0.01"
                        required=true
                        prop:value=move || vm.add_form.get().price
                        on:input=move |ev| vm.add_form.update(|f| f.price = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="add-initial-stock">"Initial stock"</label>
                    <input
                        type="number"
                        id="add-initial-stock"
                        min="0"
                        placeholder="0"
                        prop:value=move || vm.add_form.get().initial_stock
                        on:input=move |ev| vm.add_form.update(|f| f.initial_stock = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="add-reorder-level">"Reorder level"</label>
                    <input
                        type="number"
                        id="add-reorder-level"
                        min="0"
                        placeholder="5"
                        prop:value=move || vm.add_form.get().reorder_level
                        on:input=move |ev| vm.add_form.update(|f| f.reorder_level = event_target_value(&ev))
                    />
                </div>
                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=busy>
                        {icon("plus")}
                        "Add product"
                    </button>
                </div>
            </form>
        </Card>
    }
}

#[component]
pub fn BuyStockForm(vm: InventoryDashboardViewModel) -> impl IntoView {
    let busy = move || vm.is_busy(MutationAction::Buy);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_buy();
    };

    view! {
        <Card>
            <form id="form-buy-product" class="details-form" on:submit=on_submit>
                <h4>"Buy stock"</h4>
                <div class="form-group">
                    <label for=SelectionKind::Buy.element_id()>"Product"</label>
                    <ProductSelect
                        vm=vm
                        kind=SelectionKind::Buy
                        value=Signal::derive(move || vm.buy_form.get().product_id)
                        on_change=Callback::new(move |id: String| vm.buy_form.update(|f| f.product_id = id))
                    />
                </div>
                <div class="form-group">
                    <label for="buy-quantity">"Quantity"</label>
                    <input
                        type="number"
                        id="buy-quantity"
                        min="1"
                        required=true
                        prop:value=move || vm.buy_form.get().quantity
                        on:input=move |ev| vm.buy_form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </div>
                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=busy>
                        "Confirm purchase"
                    </button>
                </div>
            </form>
        </Card>
    }
}

#[component]
pub fn SellStockForm(vm: InventoryDashboardViewModel) -> impl IntoView {
    let verdict = Memo::new(move |_| vm.sell_verdict());
    let busy = move || vm.is_busy(MutationAction::Sell);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_sell();
    };

    let hint_class = move || {
        if verdict.with(|v| v.hint.is_error()) {
            "form-text text-danger fw-bold"
        } else {
            "form-text text-success"
        }
    };

    view! {
        <Card>
            <form id="form-sell-product" class="details-form" on:submit=on_submit>
                <h4>"Sell stock"</h4>
                <div class="form-group">
                    <label for=SelectionKind::Sell.element_id()>"Product"</label>
                    <ProductSelect
                        vm=vm
                        kind=SelectionKind::Sell
                        value=Signal::derive(move || vm.sell_form.get().product_id)
                        on_change=Callback::new(move |id: String| vm.sell_form.update(|f| f.product_id = id))
                    />
                </div>
                <div class="form-group">
                    <label for="sell-quantity">"Quantity"</label>
                    <input
                        type="number"
                        id="sell-quantity"
                        min="1"
                        max=move || verdict.with(|v| v.max_quantity.map(|m| m.to_string()))
                        prop:disabled=move || !verdict.with(|v| v.input_enabled)
                        prop:value=move || vm.sell_form.get().quantity
                        on:input=move |ev| vm.sell_form.update(|f| f.quantity = event_target_value(&ev))
                    />
                    <div id="stock-warning" class=hint_class>
                        {move || verdict.with(|v| v.hint.text())}
                    </div>
                </div>
                <div class="details-actions">
                    <button
                        type="submit"
                        id="btn-sell-confirm"
                        class="btn btn-primary"
                        disabled=move || busy() || !verdict.with(|v| v.confirm_enabled)
                    >
                        "Confirm sale"
                    </button>
                </div>
            </form>
        </Card>
    }
}
