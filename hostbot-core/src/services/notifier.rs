// File: src/services/notifier.rs

use tracing::{info, warn};
use hostbot_common::models::{Notification, NotificationKind};
use hostbot_common::traits::Notifier;

/// Notification surface that only writes to the log. Useful for headless
/// runs where nobody is watching a terminal.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!("{}", notification),
            NotificationKind::Error => warn!("{}", notification),
        }
    }
}
