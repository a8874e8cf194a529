// =============================================================================
// Dexter Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Pages
// 2. View Selection
// =============================================================================

use leptos::prelude::*;

use crate::state::ViewName;

pub mod about;
pub mod contact;
pub mod home;
pub mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use services::ServicesPage;

// -----------------------------------------------------------------------------
// 2. View Selection
// -----------------------------------------------------------------------------

/// Render the page for a view.
pub fn render_view(view: ViewName) -> AnyView {
    match view {
        ViewName::Home => view! { <HomePage /> }.into_any(),
        ViewName::Services => view! { <ServicesPage /> }.into_any(),
        ViewName::About => view! { <AboutPage /> }.into_any(),
        ViewName::Contact => view! { <ContactPage /> }.into_any(),
    }
}
