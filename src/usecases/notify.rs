//! Turning "N new messages" into a local OS notification.

use crate::usecases::contracts::Notifier;

const NOTIFY_DISPATCH_FAILED: &str = "NOTIFY_DISPATCH_FAILED";

/// Title and body of one local notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

/// Formats the notification for newly observed messages, or `None` when
/// there is nothing to announce.
pub fn new_message_notification(new_count: usize, group_code: &str) -> Option<NotificationContent> {
    if new_count == 0 {
        return None;
    }

    let title = if new_count == 1 {
        "New message".to_owned()
    } else {
        format!("{new_count} new messages")
    };

    Some(NotificationContent {
        title,
        body: format!("Group {group_code}"),
    })
}

/// Fire-and-forget dispatch: a failing notifier is logged and otherwise
/// ignored, so a broken notification daemon never disturbs the poll loop.
pub fn dispatch(notifier: &dyn Notifier, new_count: usize, group_code: &str) {
    let Some(content) = new_message_notification(new_count, group_code) else {
        return;
    };

    if let Err(error) = notifier.notify(&content) {
        tracing::warn!(
            code = NOTIFY_DISPATCH_FAILED,
            error = ?error,
            "local notification dispatch failed"
        );
    }
}
