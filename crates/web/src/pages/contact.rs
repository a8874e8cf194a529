// =============================================================================
// Dexter Web - Contact Page
// =============================================================================
// Table of Contents:
// 1. Contact Page
// 2. Contact Form
// 3. Contact Information
// 4. Location Map
// =============================================================================

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{ErrorDisplay, IconGlyph, PageHeader, TextArea, TextInput};
use crate::content::{Icon, ADDRESS, BUSINESS_HOURS, MAP_QUERY, PHONE};
use crate::state::{AppState, ContactField, ContactForm};
use crate::utils::{map_embed_url, tel_href};

// -----------------------------------------------------------------------------
// 1. Contact Page
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page-contact">
            <PageHeader
                title="Contact Us"
                subtitle="Get in touch with our team to learn how we can help your business grow."
            />

            <div class="contact-main">
                <div class="contact-form-col">
                    <h2>"Send Us a Message"</h2>
                    <ContactFormView />
                </div>
                <div class="contact-info-col">
                    <ContactInfo />
                </div>
            </div>

            <LocationMap />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Form
// -----------------------------------------------------------------------------

/// Controlled contact form. State lives only as long as the contact view is
/// mounted.
#[component]
fn ContactFormView() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<String>);

    let value_of = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.get(field).to_string()))
    };
    let setter_for = move |field: ContactField| {
        Callback::new(move |value: String| form.update(|f| f.update(field, value)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut record = form.get_untracked();
        match record.submit(app_state.notifier()) {
            Ok(submitted) => {
                form.set(record);
                error.set(None);
                log::info!("Contact form submitted");
                if let Ok(json) = serde_json::to_string(&submitted) {
                    log::debug!("Submission: {}", json);
                }
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let inputs = [ContactField::Name, ContactField::Email, ContactField::Subject]
        .into_iter()
        .map(|field| view! {
            <TextInput
                label=field.label()
                name=field.name()
                input_type=field.input_type()
                value=value_of(field)
                on_input=setter_for(field)
                required=true
            />
        })
        .collect_view();

    view! {
        <form class="contact-form" on:submit=on_submit>
            {move || error.get().map(|message| view! {
                <ErrorDisplay
                    message=message
                    on_dismiss=Callback::new(move |_| error.set(None))
                />
            })}
            {inputs}
            <TextArea
                label=ContactField::Message.label()
                name=ContactField::Message.name()
                value=value_of(ContactField::Message)
                on_input=setter_for(ContactField::Message)
                rows=5
                required=true
            />
            <button type="submit" class="btn-primary">"Send Message"</button>
        </form>
    }
}

// -----------------------------------------------------------------------------
// 3. Contact Information
// -----------------------------------------------------------------------------

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <h2>"Contact Information"</h2>
        <div class="contact-card">
            <div class="contact-detail">
                <IconGlyph icon=Icon::Home class="contact-icon" />
                <div>
                    <h3>"Address"</h3>
                    <p>{ADDRESS}</p>
                </div>
            </div>
            <div class="contact-detail">
                <IconGlyph icon=Icon::Phone class="contact-icon" />
                <div>
                    <h3>"Phone"</h3>
                    <p><a href=tel_href(PHONE)>{PHONE}</a></p>
                </div>
            </div>

            <div class="business-hours">
                <h3>"Business Hours"</h3>
                {BUSINESS_HOURS
                    .iter()
                    .map(|row| view! {
                        <div class="hours-row">
                            <span>{row.days}</span>
                            <span>{row.hours}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="consultation-card">
            <h3>"Ready to Get Started?"</h3>
            <p>"Schedule a free consultation with our team to discuss your business needs."</p>
            <button type="button" class="btn-light">"Book a Consultation"</button>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Location Map
// -----------------------------------------------------------------------------

#[component]
fn LocationMap() -> impl IntoView {
    view! {
        <div class="location-map">
            <iframe
                title="Company Location"
                src=map_embed_url(MAP_QUERY)
                width="100%"
                height="100%"
                style="border: 0"
                allowfullscreen=""
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </div>
    }
}
