//! Publishing local typing presence and aggregating peers'.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use serde_json::json;

use crate::{
    domain::{
        session::Session,
        typing::{active_peers, typing_banner, LocalTyping},
    },
    store::paths,
    usecases::contracts::RemoteStore,
};

const TYPING_PUBLISH_FAILED: &str = "TYPING_PUBLISH_FAILED";

/// Shared handle on the local user's typing flag.
///
/// Clones share one flag, so the presentation thread, the idle-timer thread,
/// and teardown all drive the same state machine. Publishes are change-only;
/// the flag is updated before the store write, so a failed PUT leaves the
/// remote entry stale until the next real transition corrects it.
#[derive(Clone)]
pub struct TypingPublisher {
    state: Arc<Mutex<LocalTyping>>,
    store: Arc<dyn RemoteStore + Send + Sync>,
    entry_path: String,
}

impl TypingPublisher {
    pub fn new(store: Arc<dyn RemoteStore + Send + Sync>, session: &Session) -> Self {
        Self {
            state: Arc::new(Mutex::new(LocalTyping::default())),
            store,
            entry_path: paths::typing_entry(session.group_code(), session.nickname()),
        }
    }

    /// Reports the current input buffer. Returns true when the idle-expiry
    /// deadline should be (re)armed, false when it should be canceled.
    pub fn on_input(&self, buffer: &str) -> bool {
        let decision = self
            .state
            .lock()
            .map(|mut state| state.observe_buffer(buffer))
            .unwrap_or(None);

        if let Some(value) = decision {
            self.publish(value);
        }

        !buffer.trim().is_empty()
    }

    /// The idle deadline fired: fall back to idle if still typing.
    pub fn on_idle_expired(&self) {
        self.force_idle();
    }

    /// A message was sent: typing ends regardless of the buffer.
    pub fn on_send(&self) {
        self.force_idle();
    }

    /// The chat view is going away: leave a clean `false` behind, since the
    /// store enforces no TTL on typing entries.
    pub fn on_exit(&self) {
        self.force_idle();
    }

    fn force_idle(&self) {
        let decision = self
            .state
            .lock()
            .map(|mut state| state.force_idle())
            .unwrap_or(None);

        if let Some(value) = decision {
            self.publish(value);
        }
    }

    fn publish(&self, value: bool) {
        if let Err(error) = self.store.put(&self.entry_path, &json!(value)) {
            tracing::warn!(
                code = TYPING_PUBLISH_FAILED,
                value,
                error = ?error,
                "typing presence publish failed; remote entry stays stale"
            );
        }
    }
}

/// Fetches the group's typing map and renders the peer banner for the
/// given user. Absent or malformed maps render as no one typing.
pub fn fetch_banner(
    store: &dyn RemoteStore,
    group_code: &str,
    self_nickname: &str,
) -> Result<String> {
    let document = store.get(&paths::typing_map(group_code))?;
    let peers = active_peers(document.as_ref(), self_nickname);
    Ok(typing_banner(&peers))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::InMemoryStore;
    use crate::usecases::contracts::RemoteStore;

    fn publisher(store: &InMemoryStore) -> TypingPublisher {
        let session = Session::new("ann", "team42").expect("session must build");
        TypingPublisher::new(Arc::new(store.clone()), &session)
    }

    #[test]
    fn first_keystroke_publishes_true_once() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        publisher.on_input("h");
        publisher.on_input("he");

        assert_eq!(store.put_count(), 1);
        assert_eq!(
            store.get("typing/team42/ann").expect("get must succeed"),
            Some(json!(true))
        );
    }

    #[test]
    fn on_input_signals_rearm_for_non_empty_buffer() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        assert!(publisher.on_input("h"));
        assert!(!publisher.on_input(""));
    }

    #[test]
    fn clearing_buffer_publishes_false() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        publisher.on_input("h");
        publisher.on_input("");

        assert_eq!(store.put_count(), 2);
        assert_eq!(
            store.get("typing/team42/ann").expect("get must succeed"),
            Some(json!(false))
        );
    }

    #[test]
    fn idle_expiry_publishes_false_only_while_typing() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        publisher.on_idle_expired();
        assert_eq!(store.put_count(), 0);

        publisher.on_input("h");
        publisher.on_idle_expired();
        assert_eq!(store.put_count(), 2);
    }

    #[test]
    fn send_forces_idle_despite_non_empty_buffer() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        publisher.on_input("half a draft");
        publisher.on_send();

        assert_eq!(
            store.get("typing/team42/ann").expect("get must succeed"),
            Some(json!(false))
        );
    }

    #[test]
    fn exit_without_prior_typing_publishes_nothing() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);

        publisher.on_exit();

        assert_eq!(store.put_count(), 0);
    }

    #[test]
    fn clones_share_the_same_flag() {
        let store = InMemoryStore::default();
        let publisher = publisher(&store);
        let other = publisher.clone();

        publisher.on_input("h");
        other.on_idle_expired();

        // true then false, nothing duplicated
        assert_eq!(store.put_count(), 2);
    }

    #[test]
    fn fetch_banner_excludes_self_and_formats_peers() {
        let store = InMemoryStore::default();
        store
            .put(
                "typing/team42",
                &json!({"ann": true, "bob": true, "cleo": true}),
            )
            .expect("seed must succeed");

        let banner = fetch_banner(&store, "team42", "ann").expect("fetch must succeed");

        assert_eq!(banner, "bob, cleo are typing…");
    }

    #[test]
    fn fetch_banner_is_empty_for_absent_map() {
        let store = InMemoryStore::default();

        let banner = fetch_banner(&store, "team42", "ann").expect("fetch must succeed");

        assert_eq!(banner, "");
    }

    #[test]
    fn fetch_banner_elides_beyond_three_peers() {
        let store = InMemoryStore::default();
        store
            .put(
                "typing/team42",
                &json!({"b": true, "c": true, "d": true, "e": true}),
            )
            .expect("seed must succeed");

        let banner = fetch_banner(&store, "team42", "ann").expect("fetch must succeed");

        assert_eq!(banner, "b, c, d… are typing…");
    }
}
