// =============================================================================
// Dexter Web - Layout Components
// =============================================================================
// Persistent page shell: navigation bar, content area, footer.
// =============================================================================

use leptos::prelude::*;

use crate::components::{Footer, SiteNav};

/// Main application layout wrapping the active view.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <SiteNav />
            <main class="layout-content">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
