use leptos::prelude::*;

use crate::components::panel::FieldsPanel;
use crate::config::PanelConfig;

#[component]
pub fn App() -> impl IntoView {
    // The page shell can override the API base and detail route via
    // data attributes on <body>; everything else is fixed.
    let config = PanelConfig::from_document();

    view! {
        <main class="max-w-4xl mx-auto px-4 py-6">
            <FieldsPanel config=config />
        </main>
    }
}
