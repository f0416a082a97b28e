//! Appending a message to a group's shared list.
//!
//! The append is a read-modify-write of the whole list with no
//! compare-and-swap: two clients sending concurrently can race, and the
//! later PUT silently drops the earlier append. The store offers no
//! transaction primitive, so last writer wins by design.

use anyhow::Result;
use serde_json::json;

use crate::{
    domain::message::{decode_message_list, Message},
    store::paths,
    usecases::contracts::{Clock, RemoteStore},
};

/// Command to append one message to a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub group_code: String,
    pub sender: String,
    pub text: String,
}

/// Whether the command resulted in a store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// Text was empty after trimming; nothing touched the network.
    SkippedEmpty,
}

/// Appends a message, timestamping it with the caller's clock.
///
/// Empty or whitespace-only text is a silent no-op. The current list is
/// fetched, coerced to a well-shaped list if malformed, extended, and
/// written back wholesale.
pub fn send_message(
    store: &dyn RemoteStore,
    clock: &dyn Clock,
    command: SendMessageCommand,
) -> Result<SendOutcome> {
    let text = command.text.trim();
    if text.is_empty() {
        return Ok(SendOutcome::SkippedEmpty);
    }

    let path = paths::group_messages(&command.group_code);
    let document = store.get(&path)?;
    let mut messages = decode_message_list(document.as_ref());

    messages.push(Message::new(command.sender, clock.timestamp(), text));
    store.put(&path, &json!(messages))?;

    Ok(SendOutcome::Sent)
}

/// Canned text for the quick-alert action.
pub fn alert_text(nickname: &str) -> String {
    format!("ALERT from {nickname}")
}
