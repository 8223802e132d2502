use field_panel_frontend::components::panel::FieldsPanel;
use field_panel_frontend::config::PanelConfig;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_panel_mounts_without_panicking() {
    // Mounting kicks off the initial fetch, which fails in the test page
    // (no backend). That must degrade to the error placeholder, not a panic.
    leptos::mount::mount_to_body(|| {
        view! {
            <FieldsPanel config=PanelConfig::default() />
        }
    });

    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.get_element_by_id("fields-panel").is_some());
}

#[wasm_bindgen_test]
fn test_unknown_initial_category_falls_back_to_the_first_tab() {
    // An unrecognized initial tab is silently ignored.
    leptos::mount::mount_to_body(|| {
        view! {
            <FieldsPanel config=PanelConfig::default() initial_category="archived" />
        }
    });

    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.get_element_by_id("fields-panel").is_some());
}
