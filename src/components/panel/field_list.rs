//! Field card list.
//!
//! Pure rendering of the panel's current [`ListOutcome`]: cards in backend
//! order, or one of the fixed loading/empty/error placeholders. Clicking a
//! card is a full navigation to the field's detail page.

use leptos::prelude::*;

use super::{use_panel_config, use_panel_state, ListOutcome};
use crate::api::FieldSummary;
use crate::components::design_system::{Card, CardBody, LoadingSpinner};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "Nothing to show yet";
pub const ERROR_TEXT: &str = "Failed to load data";
pub const NO_DESCRIPTION_TEXT: &str = "No description";

/// List region owned by the panel controllers.
#[component]
pub fn FieldList() -> impl IntoView {
    let state = use_panel_state();

    view! {
        <div class="min-h-[12rem]">
            {move || match state.content.get() {
                ListOutcome::Loading => view! { <LoadingPlaceholder /> }.into_any(),
                ListOutcome::Failed(_) => {
                    view! { <MessagePlaceholder text=ERROR_TEXT /> }.into_any()
                }
                ListOutcome::Ready(fields) if fields.is_empty() => {
                    view! { <MessagePlaceholder text=EMPTY_TEXT /> }.into_any()
                }
                ListOutcome::Ready(fields) => {
                    view! {
                        <div class="space-y-3">
                            {fields
                                .into_iter()
                                .map(|field| view! { <FieldCard field=field /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One interactive field card; click navigates to the detail page.
#[component]
fn FieldCard(field: FieldSummary) -> impl IntoView {
    let config = use_panel_config();
    let target = config.detail_url(&field.id);

    let description = field
        .description
        .clone()
        .unwrap_or_else(|| NO_DESCRIPTION_TEXT.to_string());

    view! {
        <div class="cursor-pointer" on:click=move |_| navigate(&target)>
            <Card class="transition-shadow hover:shadow-md">
                <CardBody class="space-y-1">
                    <h3 class="font-semibold text-slate-900">{field.title.clone()}</h3>
                    <p class="text-sm text-slate-600">{description}</p>
                    <small class="text-xs text-slate-400">
                        {format!("Created: {}", field.created_at)}
                    </small>
                </CardBody>
            </Card>
        </div>
    }
}

/// Fixed loading placeholder.
#[component]
fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-12">
            <LoadingSpinner size="lg" />
            <p class="text-sm text-slate-500">{LOADING_TEXT}</p>
        </div>
    }
}

/// Fixed, non-interactive placeholder for the empty and error states.
#[component]
fn MessagePlaceholder(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <p class="text-sm text-slate-500">{text}</p>
        </div>
    }
}

/// Full-page navigation; the natural exit point of a card interaction.
fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().assign(url) {
            web_sys::console::error_1(&err);
        }
    }
}
