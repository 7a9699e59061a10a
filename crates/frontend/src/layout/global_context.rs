use crate::shared::dom;
use leptos::prelude::*;

/// Top-level views of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    StockReport,
    TransactionLog,
}

impl AppView {
    pub const ALL: [AppView; 3] = [AppView::Dashboard, AppView::StockReport, AppView::TransactionLog];

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::StockReport => "Stock report",
            AppView::TransactionLog => "Transaction log",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppView::Dashboard => "inventory",
            AppView::StockReport => "products",
            AppView::TransactionLog => "history",
        }
    }

    /// Address bar path recorded when switching to the view
    pub fn path(&self) -> &'static str {
        match self {
            AppView::Dashboard | AppView::StockReport => "/",
            AppView::TransactionLog => "/logs",
        }
    }

    /// View a server path opens on
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/logs") {
            AppView::TransactionLog
        } else {
            AppView::Dashboard
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppView::Dashboard),
        }
    }

    /// Picks the initial view from the current location
    pub fn init_from_location(&self) {
        let view = AppView::from_path(&dom::location_pathname());
        log::debug!("initial view: {:?}", view);
        self.active.set(view);
    }

    pub fn activate(&self, view: AppView) {
        if self.active.get_untracked() == view {
            return;
        }
        log::debug!("activate view: {:?}", view);
        self.active.set(view);
        dom::push_url(view.path());
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
