//! Fetch-and-reconcile of one group's shared message list.

use std::collections::HashSet;

use anyhow::Result;

use crate::{
    domain::{
        message::{decode_message_list, Message},
        snapshot::SyncSnapshot,
    },
    store::paths,
    usecases::contracts::RemoteStore,
};

/// Result of one reconcile pass: the full rendered list in remote order and
/// the number of identities unseen by the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncUpdate {
    pub lines: Vec<String>,
    pub new_count: usize,
}

/// Owns the authoritative local view of one group's message list.
///
/// The snapshot has exactly one writer: the synchronizer instance living on
/// the poll thread. A failed fetch leaves it untouched; a successful fetch
/// replaces it wholesale, even with an empty list.
#[derive(Debug, Default)]
pub struct Synchronizer {
    snapshot: SyncSnapshot,
}

impl Synchronizer {
    pub fn new(snapshot: SyncSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &SyncSnapshot {
        &self.snapshot
    }

    /// Fetches the group's message list and reconciles it against the
    /// previous snapshot. Transport failures propagate (the caller logs and
    /// retries next cycle); malformed payloads coerce to an empty list.
    pub fn fetch_and_diff(
        &mut self,
        store: &dyn RemoteStore,
        group_code: &str,
    ) -> Result<SyncUpdate> {
        let document = store.get(&paths::group_messages(group_code))?;
        let messages = decode_message_list(document.as_ref());
        Ok(self.apply_remote(&messages))
    }

    /// Pure reconcile step, split out so tests can inject snapshots and
    /// message lists without a store.
    pub fn apply_remote(&mut self, messages: &[Message]) -> SyncUpdate {
        let current: HashSet<_> = messages.iter().map(Message::identity).collect();
        let lines: Vec<String> = messages.iter().map(Message::render_line).collect();

        let new_count = self.snapshot.count_new(&current);
        self.snapshot = SyncSnapshot::new(current, lines.clone());

        SyncUpdate { lines, new_count }
    }
}
