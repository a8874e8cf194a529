// =============================================================================
// Dexter Web - Browser Services
// =============================================================================
// Table of Contents:
// 1. Viewport (scrolling)
// 2. Notifications (acknowledgments)
// =============================================================================

pub mod notifications;
pub mod viewport;

pub use notifications::{AlertNotifier, NotifyError, Notifier};
pub use viewport::{Viewport, WindowViewport};
