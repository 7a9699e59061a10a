//! TopHeader component - application top navigation bar.

use crate::layout::global_context::{use_app_context, AppView};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Inventory"</span>
            </div>
            <nav class="top-header__actions">
                {AppView::ALL
                    .into_iter()
                    .map(|view| {
                        view! {
                            <button
                                class="top-header__nav-btn"
                                class:top-header__nav-btn--active=move || ctx.active.get() == view
                                on:click=move |_| ctx.activate(view)
                            >
                                {icon(view.icon_name())}
                                <span>{view.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
