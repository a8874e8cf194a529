// =============================================================================
// Dexter Web - Site Navigation Component
// =============================================================================
// Fixed navigation bar shown above every view.
// Mobile-responsive with a hamburger button and a drop-down panel.
// =============================================================================

use leptos::prelude::*;

use crate::components::IconGlyph;
use crate::content::Icon;
use crate::services::viewport::watch_scrolled;
use crate::state::{AppState, ViewName};

/// CSS class of a navigation link.
fn link_class(base: &'static str, view: ViewName, active: ViewName) -> String {
    if view == active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

/// Site navigation bar.
#[component]
pub fn SiteNav() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let nav = app_state.nav;

    // Cosmetic flag, tracked for as long as the bar is mounted
    let scrolled = RwSignal::new(false);
    watch_scrolled(scrolled);

    let menu_open = move || nav.with(|n| n.mobile_menu_open);

    let state = app_state.clone();
    let desktop_links = ViewName::ALL
        .into_iter()
        .map(|view| {
            let state = state.clone();
            view! {
                <button
                    type="button"
                    class=move || link_class("nav-link", view, nav.with(|n| n.view))
                    on:click=move |_| state.navigate(view)
                >
                    {view.label()}
                </button>
            }
        })
        .collect_view();

    let mobile_links = ViewName::ALL
        .into_iter()
        .map(|view| {
            let state = state.clone();
            view! {
                <button
                    type="button"
                    class=move || link_class("mobile-nav-link", view, nav.with(|n| n.view))
                    on:click=move |_| state.navigate(view)
                >
                    {view.label()}
                </button>
            }
        })
        .collect_view();

    let logo_state = app_state.clone();
    let cta_state = app_state.clone();
    let mobile_cta_state = app_state.clone();
    let toggle_state = app_state.clone();
    let backdrop_state = app_state;

    view! {
        <nav class=move || if scrolled.get() { "site-nav scrolled" } else { "site-nav" }>
            <div class="nav-inner">
                // Logo
                <button
                    type="button"
                    class="nav-logo"
                    on:click=move |_| logo_state.navigate(ViewName::Home)
                >
                    <span class="nav-wordmark">
                        "Dexter"<span class="nav-wordmark-accent">"Enterprises"</span>
                    </span>
                </button>

                // Desktop nav links (hidden on mobile)
                <div class="nav-links desktop-only">
                    {desktop_links}
                    <button
                        type="button"
                        class="nav-cta"
                        on:click=move |_| cta_state.navigate(ViewName::Contact)
                    >
                        "Get Started"
                    </button>
                </div>

                // Hamburger button (mobile only)
                <button
                    type="button"
                    class="hamburger-btn mobile-only"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| toggle_state.toggle_mobile_menu()
                >
                    {move || {
                        let icon = if menu_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconGlyph icon=icon class="hamburger-icon" /> }
                    }}
                </button>
            </div>

            // Mobile backdrop (closes menu on tap)
            <div
                class=move || if menu_open() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| backdrop_state.close_mobile_menu()
            ></div>

            // Mobile panel
            <div class=move || if menu_open() { "mobile-panel open" } else { "mobile-panel" }>
                <div class="mobile-panel-links">
                    {mobile_links}
                    <button
                        type="button"
                        class="nav-cta mobile"
                        on:click=move |_| mobile_cta_state.navigate(ViewName::Contact)
                    >
                        "Get Started"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_class_marks_only_active_view() {
        assert_eq!(link_class("nav-link", ViewName::About, ViewName::About), "nav-link active");
        assert_eq!(link_class("nav-link", ViewName::Home, ViewName::About), "nav-link");
    }
}
