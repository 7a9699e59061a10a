//! Transient notifications.
//!
//! Every call appends one notice; each notice removes itself after the configured
//! lifetime whether or not the user dismissed it first.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    fn intent(&self) -> MessageBarIntent {
        match self {
            Severity::Success => MessageBarIntent::Success,
            Severity::Warning => MessageBarIntent::Warning,
            Severity::Danger => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Ordered notices currently on screen
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            message: message.into(),
            severity,
        });
        id
    }

    /// Returns false when the notice is already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct NotifierService {
    queue: RwSignal<NoticeQueue>,
    ttl_ms: u32,
}

impl NotifierService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
            ttl_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let message = message.into();
        log::debug!("notice [{}]: {}", severity.code(), message);

        let mut id = 0;
        self.queue.update(|q| id = q.push(message, severity));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.ttl_ms).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Warning)
    }

    pub fn danger(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Danger)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.queue.with(|q| q.items().to_vec())
    }
}

pub fn use_notifier() -> NotifierService {
    leptos::context::use_context::<NotifierService>().expect("NotifierService not provided in context")
}

/// Renders the notice stack. Mount once near the root.
#[component]
pub fn NotifierHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div id="alert-container" class="notifier-host">
            <For
                each=move || notifier.notices()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice notice--{}", notice.severity.code())>
                            <MessageBar intent=notice.severity.intent()>
                                {notice.message.clone()}
                            </MessageBar>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_without_dedup() {
        let mut queue = NoticeQueue::default();
        let a = queue.push("Success", Severity::Success);
        let b = queue.push("Success", Severity::Success);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.items()[0].id, a);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = NoticeQueue::default();
        let id = queue.push("Connection error", Severity::Danger);
        let other = queue.push("Saved", Severity::Success);
        assert!(queue.dismiss(id));
        // the expiry timer firing after a manual dismissal finds nothing
        assert!(!queue.dismiss(id));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, other);
    }

    #[test]
    fn test_notices_keep_severity_in_order() {
        let mut queue = NoticeQueue::default();
        queue.push("Dashboard data could not be loaded.", Severity::Warning);
        queue.push("Insufficient stock", Severity::Danger);
        let codes: Vec<_> = queue.items().iter().map(|n| n.severity.code()).collect();
        assert_eq!(codes, vec!["warning", "danger"]);
    }
}
