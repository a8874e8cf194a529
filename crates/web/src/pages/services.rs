// =============================================================================
// Dexter Web - Services Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CheckItem, IconGlyph, PageHeader};
use crate::content::{Icon, SERVICE_CATEGORIES};
use crate::state::{AppState, ViewName};

/// Service categories and what each one offers.
#[component]
pub fn ServicesPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="page page-services">
            <PageHeader
                title="Our Services"
                subtitle="We offer a wide range of services designed to help your business grow and succeed in today's competitive market."
            />

            <div class="service-categories">
                {SERVICE_CATEGORIES
                    .iter()
                    .map(|category| view! {
                        <div class="service-category">
                            <div class="category-summary">
                                <IconGlyph icon=category.icon class="category-icon" />
                                <h2 class="category-title">{category.title}</h2>
                                <p class="category-description">{category.description}</p>
                            </div>
                            <div class="category-offerings">
                                <h3>"What We Offer:"</h3>
                                <ul class="check-list">
                                    {category
                                        .offerings
                                        .iter()
                                        .map(|offering| view! { <CheckItem>{*offering}</CheckItem> })
                                        .collect_view()}
                                </ul>
                                <button type="button" class="btn-primary">
                                    "Learn More"
                                    <IconGlyph icon=Icon::ChevronRight class="btn-icon" />
                                </button>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="cta-band centered">
                <h2 class="cta-title">"Need a Custom Solution?"</h2>
                <p class="cta-description">
                    "We understand that every business is unique. Contact us today to discuss your specific needs."
                </p>
                <button
                    type="button"
                    class="btn-light"
                    on:click=move |_| app_state.navigate(ViewName::Contact)
                >
                    "Contact Us"
                </button>
            </div>
        </div>
    }
}
