use crate::dashboards::d001_inventory::state::ProductRow;
use crate::dashboards::d001_inventory::view_model::InventoryDashboardViewModel;
use crate::shared::number_format::format_money;
use contracts::domain::a001_product::StockStatus;
use leptos::prelude::*;
use thaw::*;

fn status_badge(status: StockStatus) -> impl IntoView {
    let color = if status.is_low() {
        BadgeColor::Warning
    } else {
        BadgeColor::Success
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{status.display_name()}</Badge>
    }
}

#[component]
pub fn ProductTable(vm: InventoryDashboardViewModel) -> impl IntoView {
    let is_empty = move || vm.state.with(|s| s.table.rows.is_empty());
    let page = move || vm.state.with(|s| (s.table.current_page, s.table.total_pages.max(1)));

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"SKU"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>"Stock"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody attr:id="products-table-body">
                <Show when=is_empty>
                    <TableRow attr:id="no-products-msg">
                        <TableCell>"No products yet"</TableCell>
                    </TableRow>
                </Show>
                <For
                    each=move || vm.state.with(|s| s.table.rows.clone())
                    key=|row| (row.product.id, row.product.current_stock, row.status)
                    children=move |row: ProductRow| {
                        let id = row.product.id;
                        let is_new = move || vm.highlighted_rows.with(|set| set.contains(&id));
                        let stock_changed = move || vm.emphasized_stock.with(|set| set.contains(&id));
                        view! {
                            <TableRow attr:id=format!("row-{}", id) class:product-row--new=is_new>
                                <TableCell><strong>{row.product.name.clone()}</strong></TableCell>
                                <TableCell><code>{row.product.sku.clone()}</code></TableCell>
                                <TableCell class="text-right">{format_money(row.product.price)}</TableCell>
                                <TableCell
                                    attr:id=format!("stock-{}", id)
                                    class:stock-cell--changed=stock_changed
                                >
                                    {row.product.current_stock}
                                </TableCell>
                                <TableCell attr:id=format!("status-{}", id)>
                                    {status_badge(row.status)}
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
        // Table pages are server-rendered, moving between them is a regular navigation
        <div class="pagination-controls">
            {move || {
                let (current, _) = page();
                (current > 1).then(|| view! {
                    <a class="pagination-btn" href=format!("/?page={}", current - 1)>"‹"</a>
                })
            }}
            <span class="pagination-info">
                {move || {
                    let (current, total) = page();
                    format!("{} / {}", current, total)
                }}
            </span>
            {move || {
                let (current, total) = page();
                (current < total).then(|| view! {
                    <a class="pagination-btn" href=format!("/?page={}", current + 1)>"›"</a>
                })
            }}
        </div>
    }
}
