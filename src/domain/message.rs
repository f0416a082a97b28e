use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire type tag. The store only ever carries plain text messages; the tag
/// exists so future payload kinds do not break old clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    #[serde(rename = "message")]
    Message,
}

/// One entry of a group's shared message list.
///
/// Immutable once appended. On the wire the text lives under the `message`
/// key and the kind under `type`, matching the store's existing documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    #[serde(rename = "message", default)]
    pub text: String,
}

/// Dedup identity of a message. The store assigns no ids, so identity is the
/// `(timestamp, sender, text)` tuple; two identical texts from the same
/// sender within the same second collide and count once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId {
    pub timestamp: String,
    pub sender: String,
    pub text: String,
}

impl Message {
    pub fn new(
        sender: impl Into<String>,
        timestamp: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            timestamp: timestamp.into(),
            kind: MessageKind::Message,
            text: text.into(),
        }
    }

    pub fn identity(&self) -> MessageId {
        MessageId {
            timestamp: self.timestamp.clone(),
            sender: self.sender.clone(),
            text: self.text.clone(),
        }
    }

    /// Returns the display line: `[timestamp] sender: text`.
    pub fn render_line(&self) -> String {
        format!("[{}] {}: {}", self.timestamp, self.sender, self.text)
    }
}

const FALLBACK_SENDER: &str = "unknown";

/// Decodes a remote message list leniently.
///
/// The store is written by untrusted peers, so the shape is never assumed:
/// null or a non-array document yields an empty list, non-object elements
/// are skipped, and missing fields fall back to defaults. The poll loop must
/// survive anything the store returns.
pub fn decode_message_list(value: Option<&Value>) -> Vec<Message> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| item.as_object())
        .map(|entry| {
            Message::new(
                entry
                    .get("sender")
                    .and_then(Value::as_str)
                    .unwrap_or(FALLBACK_SENDER),
                entry
                    .get("timestamp")
                    .and_then(Value::as_str)
                    .unwrap_or_default(),
                entry
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_line_formats_timestamp_sender_and_text() {
        let message = Message::new("ann", "2026-08-30T10:00:00Z", "hello");

        assert_eq!(message.render_line(), "[2026-08-30T10:00:00Z] ann: hello");
    }

    #[test]
    fn identity_is_timestamp_sender_text_tuple() {
        let first = Message::new("ann", "2026-08-30T10:00:00Z", "hello");
        let second = Message::new("ann", "2026-08-30T10:00:00Z", "hello");
        let third = Message::new("bob", "2026-08-30T10:00:00Z", "hello");

        assert_eq!(first.identity(), second.identity());
        assert_ne!(first.identity(), third.identity());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let message = Message::new("ann", "2026-08-30T10:00:00Z", "hi");

        let value = serde_json::to_value(&message).expect("message must serialize");

        assert_eq!(
            value,
            json!({
                "sender": "ann",
                "timestamp": "2026-08-30T10:00:00Z",
                "type": "message",
                "message": "hi"
            })
        );
    }

    #[test]
    fn decode_returns_empty_for_absent_document() {
        assert!(decode_message_list(None).is_empty());
    }

    #[test]
    fn decode_returns_empty_for_non_array_document() {
        let value = json!({"sender": "ann"});

        assert!(decode_message_list(Some(&value)).is_empty());
    }

    #[test]
    fn decode_skips_non_object_elements() {
        let value = json!([42, "junk", {"sender": "ann", "timestamp": "t", "message": "ok"}]);

        let messages = decode_message_list(Some(&value));

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "ann");
    }

    #[test]
    fn decode_defaults_missing_fields() {
        let value = json!([{"timestamp": "t"}]);

        let messages = decode_message_list(Some(&value));

        assert_eq!(messages[0].sender, "unknown");
        assert_eq!(messages[0].text, "");
        assert_eq!(messages[0].timestamp, "t");
    }

    #[test]
    fn decode_preserves_remote_order() {
        let value = json!([
            {"sender": "b", "timestamp": "2", "message": "second"},
            {"sender": "a", "timestamp": "1", "message": "first"}
        ]);

        let messages = decode_message_list(Some(&value));

        assert_eq!(messages[0].text, "second");
        assert_eq!(messages[1].text, "first");
    }
}
