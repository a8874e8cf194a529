// =============================================================================
// Dexter Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Home Page
// 2. Hero
// 3. Service Highlights
// 4. Features
// 5. Call to Action
// =============================================================================

use leptos::prelude::*;

use crate::components::IconGlyph;
use crate::content::{Icon, COMPANY_NAME, FEATURES, SERVICE_HIGHLIGHTS};
use crate::state::{AppState, ViewName};

// -----------------------------------------------------------------------------
// 1. Home Page
// -----------------------------------------------------------------------------

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <Hero />
            <ServiceHighlights />
            <Features />
            <CtaSection />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Hero
// -----------------------------------------------------------------------------

#[component]
fn Hero() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="hero">
            <div class="hero-overlay"></div>
            <div class="hero-main">
                <h1 class="hero-headline">"Empowering Your Business Growth"</h1>
                <p class="hero-description">
                    {COMPANY_NAME}
                    " provides comprehensive business solutions to help your company thrive in the digital landscape."
                </p>
                <div class="hero-buttons">
                    <button
                        type="button"
                        class="btn-primary"
                        on:click=move |_| app_state.navigate(ViewName::Contact)
                    >
                        "Get Started"
                        <IconGlyph icon=Icon::ChevronRight class="btn-icon" />
                    </button>
                    <button type="button" class="btn-secondary">"Learn More"</button>
                </div>
            </div>
            <div class="hero-slant"></div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Service Highlights
// -----------------------------------------------------------------------------

#[component]
fn ServiceHighlights() -> impl IntoView {
    view! {
        <section class="section section-services">
            <div class="section-header">
                <h2 class="section-title">"Our Services"</h2>
                <p class="section-subtitle">
                    "We provide a wide range of services to help your business grow and succeed in today's competitive market."
                </p>
            </div>
            <div class="service-cards">
                {SERVICE_HIGHLIGHTS
                    .iter()
                    .map(|service| view! {
                        <div class="service-card">
                            <IconGlyph icon=service.icon class="service-icon" />
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-description">{service.description}</p>
                            <button type="button" class="link-button">
                                "Learn More"
                                <IconGlyph icon=Icon::ChevronRight class="btn-icon" />
                            </button>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Features
// -----------------------------------------------------------------------------

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section section-features">
            <div class="section-header">
                <h2 class="section-title">"Why Choose Us"</h2>
                <p class="section-subtitle">
                    "Discover what sets " {COMPANY_NAME} " apart from the competition."
                </p>
            </div>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class="feature-card">
                            <IconGlyph icon=Icon::CheckCircle class="feature-icon" />
                            <div class="feature-text">
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Call to Action
// -----------------------------------------------------------------------------

#[component]
fn CtaSection() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <section class="cta-band">
            <div class="cta-text">
                <h2 class="cta-title">"Ready to grow your business?"</h2>
                <p class="cta-description">
                    "Get in touch with us today to discuss how we can help you achieve your business goals."
                </p>
            </div>
            <button
                type="button"
                class="btn-light"
                on:click=move |_| app_state.navigate(ViewName::Contact)
            >
                "Contact Us"
                <IconGlyph icon=Icon::ArrowRight class="btn-icon" />
            </button>
        </section>
    }
}
