// =============================================================================
// Dexter Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use dexter_web::{init_logging, App, SiteConfig};

fn main() {
    let config = SiteConfig::current();
    init_logging(&config);

    log::info!("Starting Dexter Enterprises site ({:?})", config.environment);

    leptos::mount::mount_to_body(App);
}
