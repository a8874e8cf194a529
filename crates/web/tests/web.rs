// =============================================================================
// Dexter Web - Browser Tests
// =============================================================================
// Run with `wasm-pack test --headless --firefox crates/web`.
//
// Table of Contents:
// 1. Harness
// 2. Scroll Listener Teardown
// 3. Contact Form Submission
// =============================================================================

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use dexter_web::components::SiteNav;
use dexter_web::pages::ContactPage;
use dexter_web::services::viewport::watch_scrolled;
use dexter_web::services::{Notifier, NotifyError, WindowViewport};
use dexter_web::state::ACKNOWLEDGMENT;
use dexter_web::AppState;

wasm_bindgen_test_configure!(run_in_browser);

// -----------------------------------------------------------------------------
// 1. Harness
// -----------------------------------------------------------------------------

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh container appended to the body.
fn container() -> HtmlElement {
    let doc = document();
    let el: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

/// Make the page tall enough to scroll.
fn make_scrollable() {
    document()
        .body()
        .unwrap()
        .set_attribute("style", "min-height: 5000px")
        .unwrap();
}

fn event(kind: &str, cancelable: bool) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(cancelable);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

/// Scroll the window and deliver the scroll event synchronously.
fn scroll_window_to(y: f64) {
    let win = web_sys::window().unwrap();
    win.scroll_to_with_x_and_y(0.0, y);
    win.dispatch_event(&event("scroll", false)).unwrap();
}

/// Let pending render effects run.
async fn tick() {
    TimeoutFuture::new(0).await;
}

#[derive(Clone, Default)]
struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl Notifier for RecordingNotifier {
    fn acknowledge(&self, message: &str) -> Result<(), NotifyError> {
        self.0.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn acknowledge(&self, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected("blocked".into()))
    }
}

// -----------------------------------------------------------------------------
// 2. Scroll Listener Teardown
// -----------------------------------------------------------------------------

#[wasm_bindgen_test]
fn test_scroll_listener_stops_after_owner_cleanup() {
    make_scrollable();
    scroll_window_to(0.0);

    let scrolled = RwSignal::new(false);
    let owner = Owner::new();
    owner.with(|| watch_scrolled(scrolled));

    scroll_window_to(100.0);
    assert!(scrolled.get_untracked());
    scroll_window_to(0.0);
    assert!(!scrolled.get_untracked());

    owner.cleanup();

    scroll_window_to(100.0);
    assert!(!scrolled.get_untracked());
    scroll_window_to(0.0);
}

#[wasm_bindgen_test]
async fn test_site_nav_tracks_scroll_until_unmounted() {
    make_scrollable();
    scroll_window_to(0.0);

    let root = container();
    let handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(AppState::new());
        view! { <SiteNav /> }
    });

    let nav = root.query_selector("nav").unwrap().unwrap();
    assert!(!nav.class_name().contains("scrolled"));

    scroll_window_to(100.0);
    tick().await;
    assert!(nav.class_name().contains("scrolled"));

    drop(handle);
    assert!(root.query_selector("nav").unwrap().is_none());

    // The listener is gone, so its disposed signal is never touched
    scroll_window_to(0.0);
    scroll_window_to(100.0);
    tick().await;
    scroll_window_to(0.0);
    root.remove();
}

// -----------------------------------------------------------------------------
// 3. Contact Form Submission
// -----------------------------------------------------------------------------

fn input(root: &HtmlElement, name: &str) -> HtmlInputElement {
    root.query_selector(&format!("input[name={}]", name))
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn message_box(root: &HtmlElement) -> HtmlTextAreaElement {
    root.query_selector("textarea[name=message]")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// Type into every field the way a browser would.
fn fill_form(root: &HtmlElement) {
    for (name, value) in [
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("subject", "Growth"),
    ] {
        let el = input(root, name);
        el.set_value(value);
        el.dispatch_event(&event("input", false)).unwrap();
    }
    let area = message_box(root);
    area.set_value("Hello there");
    area.dispatch_event(&event("input", false)).unwrap();
}

/// Submit the form. Returns false when the default action was prevented.
fn submit(root: &HtmlElement) -> bool {
    root.query_selector("form.contact-form")
        .unwrap()
        .unwrap()
        .dispatch_event(&event("submit", true))
        .unwrap()
}

#[wasm_bindgen_test]
async fn test_contact_submit_acknowledges_and_clears_inputs() {
    let notifier = RecordingNotifier::default();
    let recorded = notifier.clone();

    let root = container();
    let handle = leptos::mount::mount_to(root.clone(), move || {
        provide_context(AppState::with_services(WindowViewport, notifier));
        view! { <ContactPage /> }
    });

    fill_form(&root);
    assert!(!submit(&root), "page navigation was not prevented");
    tick().await;

    assert_eq!(*recorded.0.lock().unwrap(), vec![ACKNOWLEDGMENT.to_string()]);
    for name in ["name", "email", "subject"] {
        assert_eq!(input(&root, name).value(), "");
    }
    assert_eq!(message_box(&root).value(), "");
    assert!(root.query_selector(".error-display").unwrap().is_none());

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_contact_submit_failure_keeps_inputs_and_shows_error() {
    let root = container();
    let handle = leptos::mount::mount_to(root.clone(), || {
        provide_context(AppState::with_services(WindowViewport, FailingNotifier));
        view! { <ContactPage /> }
    });

    fill_form(&root);
    assert!(!submit(&root));
    tick().await;

    assert!(root.query_selector(".error-display").unwrap().is_some());
    assert_eq!(input(&root, "name").value(), "Ada Lovelace");
    assert_eq!(input(&root, "email").value(), "ada@example.com");
    assert_eq!(message_box(&root).value(), "Hello there");

    drop(handle);
    root.remove();
}
