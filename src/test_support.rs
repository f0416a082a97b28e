//! Shared test doubles for store, notifier, and clock seams.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use anyhow::{bail, Result};
use serde_json::Value;

use crate::usecases::{
    contracts::{Clock, Notifier, RemoteStore},
    notify::NotificationContent,
};

#[derive(Debug, Default)]
struct InMemoryState {
    documents: BTreeMap<String, Value>,
    get_count: usize,
    put_count: usize,
}

/// In-memory document store. Clones share state, so a test can hand one
/// handle to the code under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryStore {
    pub fn get_count(&self) -> usize {
        self.state.lock().expect("store state poisoned").get_count
    }

    pub fn put_count(&self) -> usize {
        self.state.lock().expect("store state poisoned").put_count
    }
}

impl RemoteStore for InMemoryStore {
    fn get(&self, path: &str) -> Result<Option<Value>> {
        let mut state = self.state.lock().expect("store state poisoned");
        state.get_count += 1;
        Ok(state.documents.get(path).cloned())
    }

    fn put(&self, path: &str, value: &Value) -> Result<()> {
        let mut state = self.state.lock().expect("store state poisoned");
        state.put_count += 1;
        state.documents.insert(path.to_owned(), value.clone());
        Ok(())
    }
}

/// Store whose every call fails, for transient-network-failure paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

impl RemoteStore for FailingStore {
    fn get(&self, path: &str) -> Result<Option<Value>> {
        bail!("store unreachable: GET {path}")
    }

    fn put(&self, path: &str, _value: &Value) -> Result<()> {
        bail!("store unreachable: PUT {path}")
    }
}

/// Captures dispatched notifications. Clones share the capture buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<NotificationContent>>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<NotificationContent> {
        self.sent.lock().expect("notifier state poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, content: &NotificationContent) -> Result<()> {
        self.sent
            .lock()
            .expect("notifier state poisoned")
            .push(content.clone());
        Ok(())
    }
}

/// Clock pinned to one timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: String,
}

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
