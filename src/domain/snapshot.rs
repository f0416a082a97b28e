use std::collections::HashSet;

use crate::domain::message::MessageId;

/// The synchronizer's last-known view of one group's message list.
///
/// Replaced wholesale on every successful fetch, never merged field by
/// field. An empty identity set marks the initial state: the first fetch
/// after (re)joining must not count anything as new, or every join would
/// trigger a notification storm over the backlog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSnapshot {
    seen: HashSet<MessageId>,
    lines: Vec<String>,
}

impl SyncSnapshot {
    pub fn new(seen: HashSet<MessageId>, lines: Vec<String>) -> Self {
        Self { seen, lines }
    }

    /// True before the first successful fetch (or after the store returned
    /// an empty/absent list).
    pub fn is_initial(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of identities in `current` not present in this snapshot.
    /// Always zero for an initial snapshot.
    pub fn count_new(&self, current: &HashSet<MessageId>) -> usize {
        if self.is_initial() {
            return 0;
        }
        current.difference(&self.seen).count()
    }
}
