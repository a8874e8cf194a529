// =============================================================================
// Dexter Web - Footer Component
// =============================================================================
// Global footer shown below every view
// =============================================================================

use leptos::prelude::*;

use crate::components::IconGlyph;
use crate::content::{
    Icon, ADDRESS, COMPANY_LEGAL_NAME, EMAIL, FOOTER_SERVICES, LEGAL_LINKS, PHONE, SOCIAL_LINKS,
    TAGLINE,
};
use crate::state::{AppState, ViewName};
use crate::utils::{copyright_line, current_year, mailto_href, tel_href};

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Site footer with quick links and contact details.
#[component]
pub fn Footer() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let quick_links = [ViewName::Home, ViewName::About, ViewName::Services, ViewName::Contact]
        .into_iter()
        .map(|view| {
            let state = app_state.clone();
            view! {
                <li>
                    <button type="button" class="footer-link" on:click=move |_| state.navigate(view)>
                        {view.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <div class="footer-wordmark">
                        "Dexter"<span class="footer-wordmark-accent">"Enterprises"</span>
                    </div>
                    <p class="footer-tagline">{TAGLINE}</p>
                    <div class="footer-social-row">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer" class="social-link" title=link.label>
                                    <span class="sr-only">{link.label}</span>
                                    <IconGlyph icon=link.icon />
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Quick Links
                <div class="footer-link-col">
                    <h3 class="footer-col-title">"Quick Links"</h3>
                    <ul>{quick_links}</ul>
                </div>

                // Services
                <div class="footer-link-col">
                    <h3 class="footer-col-title">"Services"</h3>
                    <ul>
                        {FOOTER_SERVICES
                            .iter()
                            .map(|name| view! { <li><a href="#" class="footer-link">{*name}</a></li> })
                            .collect_view()}
                    </ul>
                </div>

                // Contact
                <div class="footer-link-col">
                    <h3 class="footer-col-title">"Contact Us"</h3>
                    <ul class="footer-contact">
                        <li>
                            <IconGlyph icon=Icon::Mail />
                            <a href=mailto_href(EMAIL) class="footer-link">{EMAIL}</a>
                        </li>
                        <li>
                            <IconGlyph icon=Icon::Home />
                            <span>{ADDRESS}</span>
                        </li>
                        <li>
                            <IconGlyph icon=Icon::Phone />
                            <a href=tel_href(PHONE) class="footer-link">{PHONE}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">{copyright_line(current_year(), COMPANY_LEGAL_NAME)}</p>
                <div class="footer-legal">
                    {LEGAL_LINKS
                        .iter()
                        .map(|label| view! { <a href="#" class="footer-link small">{*label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
