// =============================================================================
// Dexter Web - Viewport Service
// =============================================================================
// Scroll control for navigation and the scroll-position watcher used by the
// navigation bar.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;

use crate::utils::window;

/// Offset in pixels past which the page counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Scroll side effects requested by the view router.
pub trait Viewport: Send + Sync {
    /// Reset the vertical and horizontal scroll position to (0, 0).
    fn scroll_to_top(&self);
}

/// Viewport backed by the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        match window() {
            Some(win) => win.scroll_to_with_x_and_y(0.0, 0.0),
            None => log::warn!("scroll_to_top: no window object available"),
        }
    }
}

/// Whether a vertical offset counts as scrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Current vertical scroll offset, or 0 when it cannot be read.
pub fn scroll_offset() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

/// Keep `scrolled` in sync with the window scroll position for as long as the
/// calling component is mounted. The listener is removed when its owner is
/// cleaned up.
pub fn watch_scrolled(scrolled: RwSignal<bool>) {
    scrolled.set(is_scrolled(scroll_offset()));

    let handle = window_event_listener(ev::scroll, move |_| {
        let next = is_scrolled(scroll_offset());
        if scrolled.get_untracked() != next {
            scrolled.set(next);
        }
    });

    on_cleanup(move || {
        log::debug!("Releasing scroll listener");
        handle.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(SCROLL_THRESHOLD + 0.5));
        assert!(is_scrolled(400.0));
    }
}
