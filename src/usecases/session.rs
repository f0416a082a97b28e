//! Chat session orchestration: the poll loop and the intent API.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError},
        Arc, Mutex,
    },
    thread,
    time::Duration,
};

use anyhow::Result;

use crate::{
    domain::{
        events::ChatEvent,
        session::{Session, SessionError},
    },
    infra::config::ChatConfig,
    usecases::{
        contracts::{Clock, Notifier, RemoteStore},
        idle_timer::IdleTimer,
        notify,
        send_message::{self, SendMessageCommand, SendOutcome},
        sync::Synchronizer,
        typing::{self, TypingPublisher},
    },
};

const POLL_LOOP_STARTED: &str = "POLL_LOOP_STARTED";
const POLL_LOOP_STOPPED: &str = "POLL_LOOP_STOPPED";
const POLL_FETCH_FAILED: &str = "POLL_FETCH_FAILED";
const POLL_TYPING_FETCH_FAILED: &str = "POLL_TYPING_FETCH_FAILED";

/// Poll cadence and typing idle expiry for one chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub poll_interval: Duration,
    pub typing_idle: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(4),
            typing_idle: Duration::from_secs(2),
        }
    }
}

impl From<&ChatConfig> for SessionOptions {
    fn from(config: &ChatConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            typing_idle: Duration::from_millis(config.typing_idle_ms),
        }
    }
}

/// Fan-out of [`ChatEvent`]s to presentation-side subscribers.
///
/// The poll thread publishes, subscribers drain from their own context; the
/// mpsc channel is the marshaling point between the two. Dead subscribers
/// are dropped on the next publish.
#[derive(Clone, Default)]
pub struct EventHub {
    subscribers: Arc<Mutex<Vec<mpsc::Sender<ChatEvent>>>>,
}

impl EventHub {
    pub fn subscribe(&self) -> mpsc::Receiver<ChatEvent> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    pub fn publish(&self, event: ChatEvent) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|subscriber| subscriber.send(event.clone()).is_ok());
        }
    }
}

/// One poll cycle's worth of state, owned by the poll thread. The
/// synchronizer snapshot has no other writer.
struct PollWorker {
    store: Arc<dyn RemoteStore + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    session: Session,
    synchronizer: Synchronizer,
    events: EventHub,
}

impl PollWorker {
    /// Runs one fetch-and-diff pass plus one typing aggregation pass. The
    /// two halves are wrapped independently: a failure in either is logged
    /// and never cancels the other or the loop.
    fn run_cycle(&mut self) {
        let group_code = self.session.group_code();

        match self.synchronizer.fetch_and_diff(&*self.store, group_code) {
            Ok(update) => {
                if update.new_count > 0 {
                    notify::dispatch(&*self.notifier, update.new_count, group_code);
                }
                self.events.publish(ChatEvent::MessagesUpdated {
                    lines: update.lines,
                    new_count: update.new_count,
                });
            }
            Err(error) => {
                tracing::warn!(
                    code = POLL_FETCH_FAILED,
                    group = group_code,
                    error = ?error,
                    "message fetch failed; retrying next cycle"
                );
            }
        }

        match typing::fetch_banner(&*self.store, group_code, self.session.nickname()) {
            Ok(banner) => self.events.publish(ChatEvent::TypingBanner(banner)),
            Err(error) => {
                tracing::warn!(
                    code = POLL_TYPING_FETCH_FAILED,
                    group = group_code,
                    error = ?error,
                    "typing fetch failed; retrying next cycle"
                );
            }
        }
    }
}

/// A joined chat session: owns the poll loop and exposes the user intents.
///
/// Presentation code subscribes before calling [`start`](Self::start), then
/// drains events on its own thread. Teardown is cooperative: the stop flag
/// is checked each iteration, an in-flight request finishes and its result
/// is discarded with the loop.
pub struct ChatSession {
    session: Session,
    store: Arc<dyn RemoteStore + Send + Sync>,
    notifier: Arc<dyn Notifier + Send + Sync>,
    clock: Arc<dyn Clock + Send + Sync>,
    typing: TypingPublisher,
    idle_timer: IdleTimer,
    options: SessionOptions,
    events: EventHub,
    stop: Arc<AtomicBool>,
    wake_tx: mpsc::Sender<()>,
    wake_rx: Option<mpsc::Receiver<()>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl ChatSession {
    /// Validates the join intent and wires the session. No network call is
    /// made until [`start`](Self::start).
    pub fn join(
        nickname: &str,
        group_code: &str,
        store: Arc<dyn RemoteStore + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        clock: Arc<dyn Clock + Send + Sync>,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        let session = Session::new(nickname, group_code)?;
        let typing = TypingPublisher::new(Arc::clone(&store), &session);
        let idle_typing = typing.clone();
        let idle_timer = IdleTimer::start(move || idle_typing.on_idle_expired());
        let (wake_tx, wake_rx) = mpsc::channel();

        Ok(Self {
            session,
            store,
            notifier,
            clock,
            typing,
            idle_timer,
            options,
            events: EventHub::default(),
            stop: Arc::new(AtomicBool::new(false)),
            wake_tx,
            wake_rx: Some(wake_rx),
            worker: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Registers a presentation-side event receiver.
    pub fn subscribe(&self) -> mpsc::Receiver<ChatEvent> {
        self.events.subscribe()
    }

    /// Spawns the background poll loop. Idempotent: a second call is a
    /// no-op.
    pub fn start(&mut self) {
        let Some(wake_rx) = self.wake_rx.take() else {
            return;
        };

        let worker = PollWorker {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            session: self.session.clone(),
            synchronizer: Synchronizer::default(),
            events: self.events.clone(),
        };
        let stop = Arc::clone(&self.stop);
        let interval = self.options.poll_interval;

        self.worker = Some(thread::spawn(move || {
            run_poll_loop(worker, stop, wake_rx, interval);
        }));
    }

    /// Requests an immediate out-of-band poll cycle.
    pub fn refresh_now(&self) {
        let _ = self.wake_tx.send(());
    }

    /// Sends a message as the session user. Empty text is a silent no-op; a
    /// successful send forces typing idle and triggers a refresh.
    pub fn send_message(&self, text: &str) -> Result<SendOutcome> {
        let outcome = send_message::send_message(
            &*self.store,
            &*self.clock,
            SendMessageCommand {
                group_code: self.session.group_code().to_owned(),
                sender: self.session.nickname().to_owned(),
                text: text.to_owned(),
            },
        )?;

        if outcome == SendOutcome::Sent {
            self.typing.on_send();
            self.idle_timer.cancel();
            self.refresh_now();
        }

        Ok(outcome)
    }

    /// Sends the canned alert message.
    pub fn send_alert(&self) -> Result<SendOutcome> {
        self.send_message(&send_message::alert_text(self.session.nickname()))
    }

    /// Reports the current input buffer, publishing typing transitions and
    /// (re)arming the idle deadline.
    pub fn on_typing(&self, buffer: &str) {
        if self.typing.on_input(buffer) {
            self.idle_timer.arm(self.options.typing_idle);
        } else {
            self.idle_timer.cancel();
        }
    }

    /// Stops the poll loop and leaves a clean typing state behind. Also
    /// runs on drop.
    pub fn shutdown(&mut self) {
        if self.stop.swap(true, Ordering::SeqCst) {
            return;
        }

        let _ = self.wake_tx.send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }

        self.typing.on_exit();
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_poll_loop(
    mut worker: PollWorker,
    stop: Arc<AtomicBool>,
    wake_rx: mpsc::Receiver<()>,
    interval: Duration,
) {
    tracing::info!(
        code = POLL_LOOP_STARTED,
        group = worker.session.group_code(),
        "poll loop started"
    );

    while !stop.load(Ordering::SeqCst) {
        worker.run_cycle();

        match wake_rx.recv_timeout(interval) {
            Ok(()) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(
        code = POLL_LOOP_STOPPED,
        group = worker.session.group_code(),
        "poll loop stopped"
    );
}
