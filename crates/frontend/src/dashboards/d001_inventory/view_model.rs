use super::api::{dispatch, MutationAction, MutationOutcome};
use super::guard::{self, GuardVerdict};
use super::state::{synchronize, DashboardViewState, SelectionKind, ViewPatch};
use crate::shared::config::DashboardConfig;
use crate::shared::notifier::{NotifierService, Severity};
use contracts::domain::a001_product::{AddProductRequest, StockMoveRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;

pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// ViewModel for the inventory dashboard
#[derive(Clone, Copy)]
pub struct InventoryDashboardViewModel {
    pub state: RwSignal<DashboardViewState>,
    pub add_form: RwSignal<AddProductRequest>,
    pub buy_form: RwSignal<StockMoveRequest>,
    pub sell_form: RwSignal<StockMoveRequest>,
    /// Actions with a request in flight
    pub busy: RwSignal<HashSet<MutationAction>>,
    pub highlighted_rows: RwSignal<HashSet<i64>>,
    pub emphasized_stock: RwSignal<HashSet<i64>>,
    config: StoredValue<DashboardConfig>,
    notifier: NotifierService,
}

impl InventoryDashboardViewModel {
    pub fn new(config: DashboardConfig, notifier: NotifierService, initial: DashboardViewState) -> Self {
        Self {
            state: RwSignal::new(initial),
            add_form: RwSignal::new(AddProductRequest::default()),
            buy_form: RwSignal::new(StockMoveRequest::default()),
            sell_form: RwSignal::new(StockMoveRequest::default()),
            busy: RwSignal::new(HashSet::new()),
            highlighted_rows: RwSignal::new(HashSet::new()),
            emphasized_stock: RwSignal::new(HashSet::new()),
            config: StoredValue::new(config),
            notifier,
        }
    }

    pub fn is_busy(&self, action: MutationAction) -> bool {
        self.busy.with(|b| b.contains(&action))
    }

    /// Advisory check of the sell form against the cached stock
    pub fn sell_verdict(&self) -> GuardVerdict {
        let form = self.sell_form.get();
        self.state.with(|s| sell_verdict_for(s, &form))
    }

    pub fn submit_add(&self) {
        let fields = self.add_form.get_untracked();
        self.run(MutationAction::AddProduct, fields);
    }

    pub fn submit_buy(&self) {
        let fields = self.buy_form.get_untracked();
        self.run(MutationAction::Buy, fields);
    }

    /// Refuses to send while the guard disables confirm
    pub fn submit_sell(&self) {
        let form = self.sell_form.get_untracked();
        let verdict = self.state.with_untracked(|s| sell_verdict_for(s, &form));
        if !verdict.confirm_enabled {
            log::debug!("sell not sent: {}", verdict.hint.text());
            return;
        }
        self.run(MutationAction::Sell, form);
    }

    fn run<T>(&self, action: MutationAction, fields: T)
    where
        T: serde::Serialize + 'static,
    {
        if self.busy.with_untracked(|b| b.contains(&action)) {
            return;
        }
        self.busy.update(|b| {
            b.insert(action);
        });

        let vm = *self;
        let api_base = self.config.with_value(|c| c.api_base.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = dispatch(&api_base, action, &fields).await;
            vm.handle_outcome(action, outcome);
            vm.busy.try_update(|b| b.remove(&action));
        });
    }

    fn handle_outcome(&self, action: MutationAction, outcome: MutationOutcome) {
        match &outcome {
            MutationOutcome::Accepted(_) => log::debug!("{} accepted", action.label()),
            MutationOutcome::Rejected(message) => log::info!("{} rejected: {}", action.label(), message),
            MutationOutcome::TransportError(e) => log::error!("{} error: {}", action.label(), e),
        }

        // Against the latest state, not a snapshot from submit time
        let Some(effect) = self.state.try_with_untracked(|s| outcome_effect(s, &outcome)) else {
            return;
        };
        if let Some((next, patches)) = effect.next {
            self.state.set(next);
            self.flash(&patches);
        }
        self.notifier.notify(effect.message, effect.severity);
        if effect.reset_form {
            self.reset_form(action);
        }
    }

    fn reset_form(&self, action: MutationAction) {
        match action {
            MutationAction::AddProduct => self.add_form.set(AddProductRequest::default()),
            MutationAction::Buy => self.buy_form.set(StockMoveRequest::default()),
            MutationAction::Sell => self.sell_form.set(StockMoveRequest::default()),
        }
    }

    fn flash(&self, patches: &[ViewPatch]) {
        let rows: Vec<i64> = patches
            .iter()
            .filter_map(|p| match p {
                ViewPatch::RowInserted(id) => Some(*id),
                _ => None,
            })
            .collect();
        let stock: Vec<i64> = patches
            .iter()
            .filter_map(|p| match p {
                ViewPatch::StockUpdated(id) => Some(*id),
                _ => None,
            })
            .collect();

        let duration = self.config.with_value(|c| c.highlight_ms);
        highlight_for(self.highlighted_rows, rows, duration);
        highlight_for(self.emphasized_stock, stock, duration);
    }
}

/// What a completed mutation does to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeEffect {
    /// New state and its patches; `None` leaves the view untouched
    pub next: Option<(DashboardViewState, Vec<ViewPatch>)>,
    pub severity: Severity,
    pub message: String,
    pub reset_form: bool,
}

/// Only an accepted result touches the state or clears the form.
pub fn outcome_effect(state: &DashboardViewState, outcome: &MutationOutcome) -> OutcomeEffect {
    match outcome {
        MutationOutcome::Accepted(payload) => {
            let message = if payload.message.trim().is_empty() {
                "Done".to_string()
            } else {
                payload.message.clone()
            };
            OutcomeEffect {
                next: Some(synchronize(state, payload)),
                severity: Severity::Success,
                message,
                reset_form: true,
            }
        }
        MutationOutcome::Rejected(message) => OutcomeEffect {
            next: None,
            severity: Severity::Danger,
            message: message.clone(),
            reset_form: false,
        },
        MutationOutcome::TransportError(_) => OutcomeEffect {
            next: None,
            severity: Severity::Danger,
            message: CONNECTION_ERROR.to_string(),
            reset_form: false,
        },
    }
}

fn sell_verdict_for(state: &DashboardViewState, form: &StockMoveRequest) -> GuardVerdict {
    let cached = form
        .product_id
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| state.list(SelectionKind::Sell).cached_stock(id));
    guard::evaluate(cached, &form.quantity)
}

fn highlight_for(target: RwSignal<HashSet<i64>>, ids: Vec<i64>, duration_ms: u32) {
    if ids.is_empty() {
        return;
    }
    target.update(|set| set.extend(ids.iter().copied()));
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        target.try_update(|set| {
            for id in &ids {
                set.remove(id);
            }
        });
    });
}
