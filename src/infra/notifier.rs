use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::usecases::contracts::Notifier;

const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

/// Shows notifications through the desktop environment's notification
/// service (plyer's role in the mobile original).
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, content: &crate::usecases::notify::NotificationContent) -> Result<()> {
        Notification::new()
            .summary(&content.title)
            .body(&content.body)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS))
            .show()?;
        Ok(())
    }
}
