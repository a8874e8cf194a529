// =============================================================================
// Dexter Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::Layout;
use crate::pages::render_view;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component. Owns the app state and swaps the active page
/// inside the persistent layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    provide_context(app_state.clone());

    // Only re-render the page when the view changes, not when the menu toggles
    let active_view = Memo::new(move |_| app_state.view());

    view! {
        <Title text=move || active_view.get().title() />
        <Layout>
            {move || render_view(active_view.get())}
        </Layout>
    }
}
