use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 hover:bg-indigo-500 text-white border border-transparent shadow-sm"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-slate-100 text-slate-600 hover:text-slate-900 border border-transparent"
            }
        }
    }
}

/// A styled button component
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether to show a loading spinner
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded-lg transition-colors flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-indigo-400";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button class=full_class on:click=handle_click disabled=is_disabled>
            {move || {
                if loading.get() {
                    Some(view! { <LoadingSpinner size="sm" /> })
                } else {
                    None
                }
            }}
            {children()}
        </button>
    }
}
