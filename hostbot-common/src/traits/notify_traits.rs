use crate::models::notification::Notification;

/// The surface that shows submission results to the user (toast, terminal,
/// log). Called exactly once per effective submit.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
