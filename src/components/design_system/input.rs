use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Keydown event handler
    #[prop(into, optional)]
    on_keydown: Option<Callback<ev::KeyboardEvent>>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "w-full px-3 py-2 rounded-lg bg-white text-slate-900 border border-slate-300 focus:border-indigo-500 focus:ring-1 focus:ring-indigo-500 outline-none transition-colors placeholder-slate-400";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    let handle_keydown = move |evt: ev::KeyboardEvent| {
        if let Some(ref callback) = on_keydown {
            callback.run(evt);
        }
    };

    view! {
        <input
            type="text"
            class=full_class
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=handle_input
            on:keydown=handle_keydown
        />
    }
}
