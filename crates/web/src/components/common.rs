// =============================================================================
// Dexter Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Icon
// 2. Page Header
// 3. Check Item
// 4. Error Display
// =============================================================================

use leptos::prelude::*;

use crate::content::Icon;

// -----------------------------------------------------------------------------
// 1. Icon
// -----------------------------------------------------------------------------

/// Decorative icon glyph.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span class=format!("icon {}", class) aria-hidden="true">{icon.glyph()}</span>
    }
}

// -----------------------------------------------------------------------------
// 2. Page Header
// -----------------------------------------------------------------------------

/// Title band at the top of the inner pages.
#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header-inner">
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle">{subtitle}</p>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Check Item
// -----------------------------------------------------------------------------

/// List item with a check mark.
#[component]
pub fn CheckItem(children: Children) -> impl IntoView {
    view! {
        <li class="check-item">
            <IconGlyph icon=Icon::CheckCircle class="check-icon" />
            <span class="check-text">{children()}</span>
        </li>
    }
}

// -----------------------------------------------------------------------------
// 4. Error Display
// -----------------------------------------------------------------------------

/// Error message display.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
            {on_dismiss.map(|dismiss| view! {
                <button type="button" class="error-dismiss" on:click=move |_| dismiss.run(())>
                    "✕"
                </button>
            })}
        </div>
    }
}
