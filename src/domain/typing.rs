use serde_json::Value;

/// Local typing flag for the current user.
///
/// Mirrors the last value handed to the publisher, so every transition
/// method returns `Some(new_value)` only when the flag actually changed.
/// Skipping equal publishes keeps the store write rate at one PUT per real
/// transition instead of one per keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalTyping {
    typing: bool,
}

impl LocalTyping {
    /// Applies an input-buffer observation: a non-empty (trimmed) buffer
    /// means typing, an empty one means idle.
    pub fn observe_buffer(&mut self, buffer: &str) -> Option<bool> {
        self.transition_to(!buffer.trim().is_empty())
    }

    /// The idle-expiry deadline fired without a newer keystroke.
    pub fn idle_expired(&mut self) -> Option<bool> {
        self.transition_to(false)
    }

    /// Sending a message or leaving the chat forces idle regardless of the
    /// buffer content.
    pub fn force_idle(&mut self) -> Option<bool> {
        self.transition_to(false)
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    fn transition_to(&mut self, value: bool) -> Option<bool> {
        if self.typing == value {
            return None;
        }
        self.typing = value;
        Some(value)
    }
}

/// How many peer names the banner spells out before eliding the rest.
const BANNER_NAME_LIMIT: usize = 3;

/// Extracts the peers currently typing from a raw typing map, excluding the
/// caller. Absent or non-object documents yield no peers. Entry values are
/// coerced truthily rather than requiring a strict JSON bool, since other
/// clients have written strings and numbers here before. Peers keep the
/// remote object's own order (serde_json's `preserve_order` feature), so
/// the banner elides the same names every client sees first.
pub fn active_peers(map: Option<&Value>, self_nickname: &str) -> Vec<String> {
    let Some(Value::Object(entries)) = map else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|(name, value)| name.as_str() != self_nickname && is_truthy(value))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Formats the typing banner for a list of active peer names.
pub fn typing_banner(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => format!("{only} is typing…"),
        _ => {
            let shown = names[..names.len().min(BANNER_NAME_LIMIT)].join(", ");
            let elision = if names.len() > BANNER_NAME_LIMIT { "…" } else { "" };
            format!("{shown}{elision} are typing…")
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}
