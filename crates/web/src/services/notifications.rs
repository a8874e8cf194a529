// =============================================================================
// Dexter Web - Notifications Service
// =============================================================================
// Shows acknowledgments to the visitor. The browser build uses a blocking
// `window.alert`.
// =============================================================================

use thiserror::Error;

use crate::utils::window;

/// Failure to show an acknowledgment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("No window object available")]
    NoWindow,

    #[error("Browser rejected the notification: {0}")]
    Rejected(String),
}

/// Displays a short message to the visitor.
pub trait Notifier: Send + Sync {
    fn acknowledge(&self, message: &str) -> Result<(), NotifyError>;
}

/// Notifier backed by `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn acknowledge(&self, message: &str) -> Result<(), NotifyError> {
        let win = window().ok_or(NotifyError::NoWindow)?;
        win.alert_with_message(message)
            .map_err(|e| NotifyError::Rejected(format!("{:?}", e)))
    }
}
