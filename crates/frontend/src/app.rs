use crate::dashboards::d001_inventory::state::{load_initial_state, DashboardViewState};
use crate::dashboards::d001_inventory::view_model::InventoryDashboardViewModel;
use crate::dashboards::InventoryDashboard;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::layout::Shell;
use crate::shared::config::DashboardConfig;
use crate::shared::fragment::{FragmentPanel, PageView};
use crate::shared::notifier::{NotifierHost, NotifierService};
use leptos::prelude::*;

const EMPTY_DASHBOARD_NOTICE: &str = "Dashboard data could not be loaded. Reload the page to try again.";

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_from_location();

    let notifier = NotifierService::new(config.notice_ttl_ms);
    // Dashboard state outlives view switches; it is rebuilt only by a page load.
    let initial = load_initial_state().unwrap_or_else(|e| {
        log::warn!("starting with an empty dashboard: {}", e);
        notifier.warning(EMPTY_DASHBOARD_NOTICE);
        DashboardViewState::default()
    });
    let dashboard = InventoryDashboardViewModel::new(config.clone(), notifier, initial);

    // Provide the view switcher, notifier, config and dashboard to the whole app via context.
    provide_context(ctx);
    provide_context(notifier);
    provide_context(config);
    provide_context(dashboard);

    view! {
        <NotifierHost />
        <Shell>
            {move || match ctx.active.get() {
                AppView::Dashboard => view! { <InventoryDashboard /> }.into_any(),
                AppView::StockReport => view! { <FragmentPanel view=PageView::Stock /> }.into_any(),
                AppView::TransactionLog => view! { <FragmentPanel view=PageView::Logs /> }.into_any(),
            }}
        </Shell>
    }
}
