//! Thin helpers over `web_sys` for the few places that touch the host page directly.

use std::collections::HashMap;
use wasm_bindgen::JsCast;

/// Text content of an element, e.g. a `<script type="application/json">` block
pub fn element_text(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

/// Current `location.search`, including the leading `?`
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn location_pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Reads `page` from a query string. Missing, non-numeric or zero values mean page 1.
pub fn page_from_search(search: &str) -> u32 {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("page")
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

pub fn current_page() -> u32 {
    page_from_search(&location_search())
}

/// Pushes a new address bar entry without navigating
pub fn push_url(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
                log::warn!("pushState to {} failed: {:?}", url, e);
            }
        }
        Err(e) => log::warn!("history unavailable: {:?}", e),
    }
}

/// Page number carried by the nearest `[data-page]` ancestor of the event target
pub fn data_page_of(event: &web_sys::Event) -> Option<u32> {
    let target = event.target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    let holder = element.closest("[data-page]").ok()??;
    holder
        .get_attribute("data-page")?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|p| *p > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?page=3"), 3);
        assert_eq!(page_from_search("page=2&ajax=1"), 2);
        assert_eq!(page_from_search(""), 1);
        assert_eq!(page_from_search("?page=abc"), 1);
        assert_eq!(page_from_search("?page=0"), 1);
    }
}
