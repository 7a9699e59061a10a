//! Page loader: swaps a container's markup for a server-rendered fragment.
//!
//! The server renders the paginated views; the client only asks for fragment-only
//! output (`?page=N&<marker>=1`), drops it into the container and records the page
//! in the address bar.

use crate::shared::api_utils::api_url;
use crate::shared::config::{use_config, DashboardConfig};
use crate::shared::dom;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Stock,
    Logs,
}

impl PageView {
    pub fn path(&self) -> &'static str {
        match self {
            PageView::Stock => "/",
            PageView::Logs => "/logs",
        }
    }

    pub fn container_id(&self) -> &'static str {
        match self {
            PageView::Stock => "stock-container",
            PageView::Logs => "logs-container",
        }
    }
}

/// Server URL of the fragment for `page`
pub fn fragment_url(api_base: &str, marker: &str, view: PageView, page: u32) -> String {
    format!("{}?page={}&{}=1", api_url(api_base, view.path()), page, marker)
}

/// Address bar entry for `page`
pub fn address_url(view: PageView, page: u32) -> String {
    format!("{}?page={}", view.path(), page)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentState {
    pub html: String,
    pub page: u32,
    pub error: Option<String>,
    /// Requests started and not yet finished
    in_flight: u32,
    /// Ticket of the most recent request
    latest: u64,
}

impl FragmentState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Starts a request and returns its ticket
    fn begin(&mut self) -> u64 {
        self.in_flight += 1;
        self.latest += 1;
        self.latest
    }

    fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Results of superseded requests are dropped. Returns whether `html` was taken.
    fn accept(&mut self, ticket: u64, page: u32, html: String) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.html = html;
        self.page = page;
        self.error = None;
        true
    }

    fn fail(&mut self, ticket: u64, error: String) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.error = Some(error);
        true
    }
}

/// Keeps the container in the loading state while its request is alive
struct LoadingGuard {
    state: RwSignal<FragmentState>,
    ticket: u64,
}

impl LoadingGuard {
    fn hold(state: RwSignal<FragmentState>) -> Self {
        let ticket = state.try_update(|s| s.begin()).unwrap_or_default();
        Self { state, ticket }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state.try_update(|s| s.finish());
    }
}

pub async fn fetch_fragment(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .header("Accept", "text/html")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read fragment: {}", e))
}

/// Loads `page` of `view` into `state`. Previous markup stays on failure.
pub fn load_page(state: RwSignal<FragmentState>, config: &DashboardConfig, view: PageView, page: u32) {
    let url = fragment_url(&config.api_base, &config.fragment_marker, view, page);
    let address = address_url(view, page);

    spawn_local(async move {
        let loading = LoadingGuard::hold(state);
        log::debug!("loading fragment {}", url);

        match fetch_fragment(&url).await {
            Ok(html) => {
                let current = state
                    .try_update(|s| s.accept(loading.ticket, page, html))
                    .unwrap_or(false);
                if current {
                    dom::push_url(&address);
                } else {
                    log::debug!("dropping superseded fragment {}", url);
                }
            }
            Err(e) => {
                log::error!("Loading page error ({}): {}", url, e);
                state.try_update(|s| s.fail(loading.ticket, e));
            }
        }
    });
}

/// Container showing one paginated server view.
///
/// Elements inside the fragment carrying `data-page="N"` switch to page N in place.
#[component]
pub fn FragmentPanel(view: PageView) -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(FragmentState {
        page: dom::current_page(),
        ..Default::default()
    });

    load_page(state, &config, view, state.get_untracked().page);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(page) = dom::data_page_of(&ev) {
            ev.prevent_default();
            load_page(state, &config, view, page);
        }
    };

    view! {
        <div class="fragment-panel">
            {move || state.get().error.map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{format!("Could not load page: {}", e)}</MessageBar>
            })}
            <div
                id=view.container_id()
                class="fragment-container"
                class:fragment-container--loading=move || state.get().is_loading()
                style=move || if state.get().is_loading() { "opacity: 0.5;" } else { "opacity: 1;" }
                on:click=on_click
                inner_html=move || state.get().html
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_url() {
        assert_eq!(fragment_url("", "ajax", PageView::Stock, 2), "/?page=2&ajax=1");
        assert_eq!(
            fragment_url("http://localhost:5000/", "ajax", PageView::Logs, 1),
            "http://localhost:5000/logs?page=1&ajax=1"
        );
    }

    #[test]
    fn test_address_url_keeps_page() {
        assert_eq!(address_url(PageView::Logs, 4), "/logs?page=4");
        assert_eq!(address_url(PageView::Stock, 1), "/?page=1");
    }

    #[test]
    fn test_loading_until_last_request_finishes() {
        let mut state = FragmentState::default();
        state.begin();
        state.begin();
        state.finish();
        assert!(state.is_loading());
        state.finish();
        assert!(!state.is_loading());
    }

    #[test]
    fn test_superseded_result_is_dropped() {
        let mut state = FragmentState::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.accept(second, 3, "<p>page 3</p>".to_string()));
        assert!(!state.accept(first, 2, "<p>page 2</p>".to_string()));
        assert_eq!(state.page, 3);
        assert_eq!(state.html, "<p>page 3</p>");
    }

    #[test]
    fn test_failure_keeps_previous_markup() {
        let mut state = FragmentState::default();
        let ticket = state.begin();
        state.accept(ticket, 1, "<p>page 1</p>".to_string());
        state.finish();

        let ticket = state.begin();
        assert!(state.fail(ticket, "HTTP error: 500".to_string()));
        state.finish();
        assert_eq!(state.html, "<p>page 1</p>");
        assert_eq!(state.page, 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_failure_does_not_mask_newer_page() {
        let mut state = FragmentState::default();
        let first = state.begin();
        let second = state.begin();
        state.accept(second, 2, "<p>page 2</p>".to_string());
        assert!(!state.fail(first, "Request failed".to_string()));
        assert_eq!(state.error, None);
    }
}
