// =============================================================================
// Dexter Web - Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Views
// 3. Navigation State
// 4. App State
// 5. Contact Form State
// =============================================================================

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::content::COMPANY_NAME;
use crate::services::{AlertNotifier, Notifier, NotifyError, Viewport, WindowViewport};

// -----------------------------------------------------------------------------
// 2. Views
// -----------------------------------------------------------------------------

/// Top-level pages of the site. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewName {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl ViewName {
    /// All views in navigation order.
    pub const ALL: [ViewName; 4] = [
        ViewName::Home,
        ViewName::Services,
        ViewName::About,
        ViewName::Contact,
    ];

    /// Stable lowercase identifier, used for logging and element ids.
    pub fn slug(self) -> &'static str {
        match self {
            ViewName::Home => "home",
            ViewName::Services => "services",
            ViewName::About => "about",
            ViewName::Contact => "contact",
        }
    }

    /// Link text shown in the navigation bar and footer.
    pub fn label(self) -> &'static str {
        match self {
            ViewName::Home => "Home",
            ViewName::Services => "Services",
            ViewName::About => "About Us",
            ViewName::Contact => "Contact",
        }
    }

    /// Document title while this view is active.
    pub fn title(self) -> String {
        match self {
            ViewName::Home => COMPANY_NAME.to_string(),
            other => format!("{} | {}", other.label(), COMPANY_NAME),
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

// -----------------------------------------------------------------------------
// 3. Navigation State
// -----------------------------------------------------------------------------

/// Active view plus the mobile menu flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub view: ViewName,
    pub mobile_menu_open: bool,
}

impl NavState {
    /// Switch to `view` and close the mobile menu.
    pub fn navigate(&mut self, view: ViewName) {
        self.view = view;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

// -----------------------------------------------------------------------------
// 4. App State
// -----------------------------------------------------------------------------

/// Application state created by the root component and provided via Leptos
/// context.
#[derive(Clone)]
pub struct AppState {
    /// Current view and mobile menu flag.
    pub nav: RwSignal<NavState>,

    /// Target of the scroll reset performed on every navigation.
    viewport: Arc<dyn Viewport>,

    /// Shows the contact form acknowledgment.
    notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// Create app state bound to the browser window.
    pub fn new() -> Self {
        Self::with_services(WindowViewport, AlertNotifier)
    }

    /// Create app state with a custom viewport.
    pub fn with_viewport(viewport: impl Viewport + 'static) -> Self {
        Self::with_services(viewport, AlertNotifier)
    }

    /// Create app state with custom browser services.
    pub fn with_services(
        viewport: impl Viewport + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            nav: RwSignal::new(NavState::default()),
            viewport: Arc::new(viewport),
            notifier: Arc::new(notifier),
        }
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Currently active view (tracked).
    pub fn view(&self) -> ViewName {
        self.nav.with(|nav| nav.view)
    }

    /// Activate `view`, close the mobile menu and scroll to the top. Runs the
    /// side effects even when `view` is already active.
    pub fn navigate(&self, view: ViewName) {
        let from = self.nav.with_untracked(|nav| nav.view);
        self.nav.update(|nav| nav.navigate(view));
        self.viewport.scroll_to_top();
        log::debug!("navigate: {} -> {}", from, view);
    }

    pub fn toggle_mobile_menu(&self) {
        self.nav.update(NavState::toggle_mobile_menu);
    }

    pub fn close_mobile_menu(&self) {
        self.nav.update(NavState::close_mobile_menu);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 5. Contact Form State
// -----------------------------------------------------------------------------

/// Message shown after a contact form submission.
pub const ACKNOWLEDGMENT: &str = "Thank you for your message! We will get back to you soon.";

/// Fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// HTML `name` and `id` of the control.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// `type` attribute of the input. The message field is a textarea.
    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

/// Contact form submission could not be confirmed. The form keeps its
/// contents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Your message could not be confirmed: {0}")]
    Acknowledgment(#[from] NotifyError),
}

/// Contents of the contact form. Empty fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Read a field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrite a field verbatim.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Show the acknowledgment and clear the form, returning what was
    /// submitted. Nothing is transmitted.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Result<ContactForm, SubmitError> {
        notifier.acknowledge(ACKNOWLEDGMENT)?;
        Ok(std::mem::take(self))
    }
}
