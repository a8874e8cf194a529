// =============================================================================
// Dexter Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Controlled text input with label. The displayed value always comes from
/// `value`; edits are reported through `on_input`.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label for=name.clone() class="form-label">{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                class="form-input"
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Controlled multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 5 } else { rows };

    view! {
        <div class="form-field">
            <label for=name.clone() class="form-label">{label}</label>
            <textarea
                id=name.clone()
                name=name
                class="form-textarea"
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |e| on_input.run(event_target_value(&e))
            />
        </div>
    }
}
