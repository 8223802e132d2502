//! Category tab strip.
//!
//! Clicking a tab marks it active and reloads the panel with that category's
//! default list. A tab switch while a fetch is in flight simply outraces it:
//! the older completion arrives with a stale token and is discarded.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{use_panel_config, use_panel_state, Category, PanelState};
use crate::api;
use crate::config::PanelConfig;

/// Activate a category: mark it active and fetch its default list.
///
/// Shared by tab clicks and the panel's initial load so both paths go
/// through the same state transitions.
pub fn load_category(state: PanelState, config: &PanelConfig, category: Category) {
    let token = state.begin_activate(category);
    let api_base = config.api_base.clone();
    spawn_local(async move {
        let result = api::fetch_fields(&api_base, category.as_str()).await;
        state.apply_default_result(token, result);
    });
}

/// Category tab strip; exactly one tab is marked active at a time.
#[component]
pub fn CategoryTabs() -> impl IntoView {
    let state = use_panel_state();
    let config = use_panel_config();

    view! {
        <nav class="flex gap-1 rounded-lg bg-slate-100 p-1">
            {Category::all()
                .iter()
                .map(|category| {
                    let category = *category;
                    let config = config.clone();
                    let is_active = move || state.active_category.get() == category;
                    view! {
                        <button
                            class=move || format!(
                                "px-4 py-1.5 text-sm rounded-md transition-colors {}",
                                if is_active() {
                                    "bg-white text-slate-900 shadow-sm font-medium"
                                } else {
                                    "text-slate-500 hover:text-slate-900"
                                },
                            )
                            on:click=move |_| load_category(state, &config, category)
                        >
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
