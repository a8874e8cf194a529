// =============================================================================
// Dexter Web - About Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CheckItem, IconGlyph, PageHeader};
use crate::content::{Icon, STORY, VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page-about">
            <PageHeader
                title="About Us"
                subtitle="Learn more about Dexter Enterprises and our mission to help businesses thrive in the digital landscape."
            />

            <div class="about-main">
                <div class="about-story">
                    <h2>"Our Story"</h2>
                    {STORY.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>

                <div class="about-values">
                    <IconGlyph icon=Icon::Award class="values-icon" />
                    <h3>"Our Values"</h3>
                    <ul class="check-list">
                        {VALUES
                            .iter()
                            .map(|value| view! {
                                <CheckItem>
                                    <strong>{value.name}":"</strong>
                                    " "
                                    {value.statement}
                                </CheckItem>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
