//! Search bar.
//!
//! Submitting a non-empty query fetches matching fields and shows them in
//! place of the active category's list. Submitting an empty query leaves
//! search mode and restores the cached default list with no network call.
//! The button and the Enter key converge on the same submit path.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{use_panel_config, use_panel_state, PanelState};
use crate::api;
use crate::components::design_system::{Button, ButtonVariant, Input};
use crate::config::PanelConfig;

/// Submit a search query. The query is trimmed first; an empty result is the
/// "exit search mode" sentinel.
pub fn submit_search(state: PanelState, config: &PanelConfig, raw_query: &str) {
    let query = raw_query.trim().to_string();
    state.query.set(query.clone());

    if query.is_empty() {
        state.exit_search();
        return;
    }

    let token = state.begin_search();
    let api_base = config.api_base.clone();
    spawn_local(async move {
        let result = api::search_fields(&api_base, &query).await;
        state.apply_search_result(token, result);
    });
}

/// Search input with an explicit submit button; Enter submits as well.
#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_panel_state();
    let config = use_panel_config();

    // The input edits the shared query directly; submit normalizes it to the
    // trimmed form in place.
    let query = state.query;

    let on_click = {
        let config = config.clone();
        move |_: ev::MouseEvent| {
            submit_search(state, &config, &query.get_untracked());
        }
    };

    let on_keydown = {
        let config = config.clone();
        Callback::new(move |evt: ev::KeyboardEvent| {
            if evt.key() == "Enter" {
                evt.prevent_default();
                submit_search(state, &config, &query.get_untracked());
            }
        })
    };

    // Only a search request lights up the button's spinner; category tab
    // loads show their own placeholder in the list region.
    let is_loading = Signal::derive(move || state.is_search_loading());

    view! {
        <div class="flex gap-2 sm:w-80">
            <Input
                value=query
                placeholder="Search fields..."
                on_keydown=on_keydown
            />
            <Button variant=ButtonVariant::Primary on_click=on_click loading=is_loading>
                "Search"
            </Button>
        </div>
    }
}
