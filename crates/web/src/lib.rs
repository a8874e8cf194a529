// =============================================================================
// Dexter Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use state::{AppState, ContactField, ContactForm, ViewName};

// -----------------------------------------------------------------------------
// 3. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger for this build.
pub fn init_logging(config: &SiteConfig) {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(config.log_level());
}

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    init_logging(&SiteConfig::current());
    log::info!("Mounting Dexter Enterprises site...");
    leptos::mount::mount_to_body(app::App);
}
